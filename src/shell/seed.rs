use crate::modules::work_logs::core::work_log::WorkLog;
use anyhow::Context;
use std::path::Path;

/// Read a JSON array of work logs used to fill the in memory store at startup.
pub async fn load_work_log_seed(path: &Path) -> anyhow::Result<Vec<WorkLog>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading work log seed {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing work log seed {}", path.display()))
}
