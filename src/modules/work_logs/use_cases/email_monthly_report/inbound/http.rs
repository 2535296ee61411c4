use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::work_logs::use_cases::email_monthly_report::command::EmailMonthlyReport;
use crate::shell::auth::Principal;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EmailMonthlyReportBody {
    #[serde(alias = "userId")]
    pub user_id: String,
    pub email: String,
    pub month: u32,
    pub year: i32,
}

pub async fn handle(
    State(state): State<AppState>,
    principal: Principal,
    body: Result<Json<EmailMonthlyReportBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    if !principal.can_access_user(&body.user_id) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let command = EmailMonthlyReport {
        user_id: body.user_id,
        recipient: body.email,
        month: body.month,
        year: body.year,
        zone_id: state.report_zone_id.clone(),
    };

    match state.email_report_handler.handle(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(&error),
    }
}
