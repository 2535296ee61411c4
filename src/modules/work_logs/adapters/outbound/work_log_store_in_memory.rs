// In memory work log store.
//
// Purpose
// - Serve report handlers in tests and local runs without a database.
//
// Responsibilities
// - Keep rows in insertion order and answer the inclusive range query.
// - Simulate an unreachable backend through `toggle_offline`.

use crate::modules::work_logs::adapters::outbound::work_log_store::{
    WorkLogStore, WorkLogStoreError,
};
use crate::modules::work_logs::core::work_log::WorkLog;
use crate::shared::core::primitives::instant_from_millis;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryWorkLogStore {
    rows: RwLock<Vec<WorkLog>>,
    is_offline: bool,
}

impl InMemoryWorkLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<WorkLog>) -> Self {
        Self {
            rows: RwLock::new(rows),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert(&self, row: WorkLog) {
        self.rows.write().await.push(row);
    }
}

#[async_trait::async_trait]
impl WorkLogStore for InMemoryWorkLogStore {
    async fn find_by_user_and_instant_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WorkLog>, WorkLogStoreError> {
        if self.is_offline {
            return Err(WorkLogStoreError::Backend("Work log store offline".into()));
        }

        let guard = self.rows.read().await;
        Ok(guard
            .iter()
            .filter(|row| row.user_id == user_id)
            .filter(|row| {
                instant_from_millis(row.start_time)
                    .is_some_and(|started| started >= start && started <= end)
            })
            .cloned()
            .collect())
    }
}
