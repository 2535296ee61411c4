use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::modules::work_logs::use_cases::email_monthly_report::inbound::http as email_http;
use crate::modules::work_logs::use_cases::errors::{ReportError, ReportErrorKind};
use crate::modules::work_logs::use_cases::generate_monthly_report::inbound::http as report_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/reports/monthly", get(report_http::handle))
        .route("/reports/email", post(email_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}

pub fn status_for(kind: ReportErrorKind) -> StatusCode {
    match kind {
        ReportErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ReportErrorKind::NotFound => StatusCode::NOT_FOUND,
        ReportErrorKind::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        ReportErrorKind::DeliveryFailure => StatusCode::BAD_GATEWAY,
        ReportErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(error: &ReportError) -> Response {
    let status = status_for(error.kind());
    if status.is_server_error() {
        tracing::error!(%error, "report request failed");
    }
    (status, Json(serde_json::json!({ "error": error.to_string() }))).into_response()
}
