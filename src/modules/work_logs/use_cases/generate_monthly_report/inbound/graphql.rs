use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::work_logs::use_cases::generate_monthly_report::report::{
    MonthlyReport, REPORT_DOWNLOAD_FILENAME, REPORT_MIME_TYPE, ReportLine,
};
use crate::modules::work_logs::use_cases::generate_monthly_report::request::MonthlyReportRequest;
use crate::shell::graphql::{authorize, report_error};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReportLine {
    pub start: String,
    pub end: String,
    pub hours: String,
}

impl From<ReportLine> for GqlReportLine {
    fn from(line: ReportLine) -> Self {
        Self {
            start: line.start,
            end: line.end,
            hours: line.hours,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMonthlyReport {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
    pub lines: Vec<GqlReportLine>,
}

impl From<MonthlyReport> for GqlMonthlyReport {
    fn from(report: MonthlyReport) -> Self {
        Self {
            file_name: REPORT_DOWNLOAD_FILENAME.to_string(),
            mime_type: REPORT_MIME_TYPE.to_string(),
            content: String::from_utf8_lossy(&report.content).into_owned(),
            lines: report.document.lines.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn monthly_report(
        &self,
        context: &Context<'_>,
        user_id: String,
        month: u32,
        year: i32,
    ) -> GqlResult<GqlMonthlyReport> {
        authorize(context, &user_id)?;
        let state = context.data_unchecked::<AppState>();
        let report = state
            .generate_report_handler
            .handle(MonthlyReportRequest {
                user_id,
                month,
                year,
                zone_id: state.report_zone_id.clone(),
            })
            .await
            .map_err(report_error)?;
        Ok(report.into())
    }
}
