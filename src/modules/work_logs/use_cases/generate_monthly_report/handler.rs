use crate::modules::work_logs::adapters::outbound::work_log_store::WorkLogStore;
use crate::modules::work_logs::core::month_interval::month_interval;
use crate::modules::work_logs::core::zone::parse_zone;
use crate::modules::work_logs::use_cases::errors::ReportError;
use crate::modules::work_logs::use_cases::generate_monthly_report::format::format_report;
use crate::modules::work_logs::use_cases::generate_monthly_report::report::MonthlyReport;
use crate::modules::work_logs::use_cases::generate_monthly_report::request::MonthlyReportRequest;
use std::sync::Arc;

pub const WORK_LOG_ENTITY: &str = "WorkLog";

pub struct GenerateMonthlyReportHandler<TStore>
where
    TStore: WorkLogStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GenerateMonthlyReportHandler<TStore>
where
    TStore: WorkLogStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(user_id = %request.user_id, month = request.month, year = request.year)
    )]
    pub async fn handle(&self, request: MonthlyReportRequest) -> Result<MonthlyReport, ReportError> {
        let zone =
            parse_zone(&request.zone_id).ok_or_else(|| ReportError::UnknownZone(request.zone_id.clone()))?;
        let interval = month_interval(request.year, request.month, zone)?;

        let work_logs = self
            .store
            .find_by_user_and_instant_range(&request.user_id, interval.start, interval.end)
            .await?;

        if work_logs.is_empty() {
            tracing::warn!("no work logs in requested month");
            return Err(ReportError::NotFound {
                entity: WORK_LOG_ENTITY,
                user_id: request.user_id,
                month: request.month,
                year: request.year,
            });
        }

        let document = format_report(&work_logs, zone)?;
        let content = document.to_bytes();
        tracing::info!(lines = document.lines.len(), bytes = content.len(), "monthly report generated");

        Ok(MonthlyReport {
            request,
            document,
            content,
        })
    }
}
