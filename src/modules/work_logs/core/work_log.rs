use crate::shared::core::primitives::EpochMillis;

/// One recorded work session, as returned by the work log store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WorkLog {
    pub work_log_id: String,
    pub user_id: String,
    pub start_time: EpochMillis,
    pub duration_ms: u64,
}

impl WorkLog {
    /// `None` when the end falls outside the representable millisecond range.
    pub fn end_time(&self) -> Option<EpochMillis> {
        i64::try_from(self.duration_ms)
            .ok()
            .and_then(|duration| self.start_time.checked_add(duration))
    }
}
