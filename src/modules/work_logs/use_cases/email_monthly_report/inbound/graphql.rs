use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::work_logs::use_cases::email_monthly_report::command::EmailMonthlyReport;
use crate::shell::graphql::{authorize, report_error};
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn email_monthly_report(
        &self,
        context: &Context<'_>,
        user_id: String,
        email: String,
        month: u32,
        year: i32,
    ) -> GqlResult<bool> {
        authorize(context, &user_id)?;
        let state = context.data_unchecked::<AppState>();

        state
            .email_report_handler
            .handle(EmailMonthlyReport {
                user_id,
                recipient: email,
                month,
                year,
                zone_id: state.report_zone_id.clone(),
            })
            .await
            .map_err(report_error)?;

        Ok(true)
    }
}
