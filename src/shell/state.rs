use crate::modules::work_logs::adapters::outbound::work_log_store_in_memory::InMemoryWorkLogStore;
use crate::modules::work_logs::use_cases::email_monthly_report::handler::EmailMonthlyReportHandler;
use crate::modules::work_logs::use_cases::generate_monthly_report::handler::GenerateMonthlyReportHandler;
use crate::shared::infrastructure::mailer::in_memory::InMemoryMailer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub generate_report_handler: Arc<GenerateMonthlyReportHandler<InMemoryWorkLogStore>>,
    pub email_report_handler: Arc<EmailMonthlyReportHandler<InMemoryWorkLogStore, InMemoryMailer>>,
    pub report_zone_id: String,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryWorkLogStore>,
        mailer: Arc<InMemoryMailer>,
        report_zone_id: impl Into<String>,
    ) -> Self {
        let generate_report_handler = Arc::new(GenerateMonthlyReportHandler::new(store));
        let email_report_handler = Arc::new(EmailMonthlyReportHandler::new(
            generate_report_handler.clone(),
            mailer,
        ));
        Self {
            generate_report_handler,
            email_report_handler,
            report_zone_id: report_zone_id.into(),
        }
    }
}
