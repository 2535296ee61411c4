use crate::modules::work_logs::adapters::outbound::work_log_store::WorkLogStore;
use crate::modules::work_logs::use_cases::email_monthly_report::command::EmailMonthlyReport;
use crate::modules::work_logs::use_cases::email_monthly_report::compose::compose_report_email;
use crate::modules::work_logs::use_cases::errors::ReportError;
use crate::modules::work_logs::use_cases::generate_monthly_report::handler::GenerateMonthlyReportHandler;
use crate::modules::work_logs::use_cases::generate_monthly_report::request::MonthlyReportRequest;
use crate::shared::infrastructure::mailer::Mailer;
use std::sync::Arc;

pub struct EmailMonthlyReportHandler<TStore, TMailer>
where
    TStore: WorkLogStore + Send + Sync + 'static,
    TMailer: Mailer + Send + Sync + 'static,
{
    generator: Arc<GenerateMonthlyReportHandler<TStore>>,
    mailer: Arc<TMailer>,
}

impl<TStore, TMailer> EmailMonthlyReportHandler<TStore, TMailer>
where
    TStore: WorkLogStore + Send + Sync + 'static,
    TMailer: Mailer + Send + Sync + 'static,
{
    pub fn new(generator: Arc<GenerateMonthlyReportHandler<TStore>>, mailer: Arc<TMailer>) -> Self {
        Self { generator, mailer }
    }

    #[tracing::instrument(
        skip(self, command),
        fields(user_id = %command.user_id, month = command.month, year = command.year)
    )]
    pub async fn handle(&self, command: EmailMonthlyReport) -> Result<(), ReportError> {
        if command.recipient.trim().is_empty() {
            return Err(ReportError::InvalidRecipient(command.recipient));
        }

        let report = self
            .generator
            .handle(MonthlyReportRequest {
                user_id: command.user_id,
                month: command.month,
                year: command.year,
                zone_id: command.zone_id,
            })
            .await?;

        let email = compose_report_email(&command.recipient, report);
        self.mailer.send(email).await.map_err(|error| {
            tracing::warn!(%error, "monthly report delivery failed");
            ReportError::DeliveryFailure(error)
        })?;

        tracing::info!("monthly report emailed");
        Ok(())
    }
}
