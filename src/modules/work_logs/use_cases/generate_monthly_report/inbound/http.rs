use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::work_logs::use_cases::generate_monthly_report::report::{
    REPORT_MIME_TYPE, report_download_disposition,
};
use crate::modules::work_logs::use_cases::generate_monthly_report::request::MonthlyReportRequest;
use crate::shell::auth::Principal;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MonthlyReportParams {
    #[serde(alias = "userId")]
    pub user_id: String,
    pub month: u32,
    pub year: i32,
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    Query(params): Query<MonthlyReportParams>,
) -> impl IntoResponse {
    if !principal.can_access_user(&params.user_id) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let request = MonthlyReportRequest {
        user_id: params.user_id,
        month: params.month,
        year: params.year,
        zone_id: state.report_zone_id.clone(),
    };

    match state.generate_report_handler.handle(request).await {
        Ok(report) => (
            [
                (header::CONTENT_TYPE, REPORT_MIME_TYPE.to_string()),
                (header::CONTENT_DISPOSITION, report_download_disposition()),
            ],
            report.content,
        )
            .into_response(),
        Err(error) => error_response(&error),
    }
}
