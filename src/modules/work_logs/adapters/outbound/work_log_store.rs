use crate::modules::work_logs::core::work_log::WorkLog;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkLogStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Read side of the time tracking store.
///
/// Returns every work log of `user_id` whose start lies in `[start, end]`, both ends
/// inclusive. No ordering is promised.
#[async_trait]
pub trait WorkLogStore: Send + Sync {
    async fn find_by_user_and_instant_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WorkLog>, WorkLogStoreError>;
}
