use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, http::HeaderMap};

pub use crate::modules::work_logs::use_cases::email_monthly_report::inbound::graphql::MutationRoot;
pub use crate::modules::work_logs::use_cases::generate_monthly_report::inbound::graphql::QueryRoot;
use crate::modules::work_logs::use_cases::errors::{ReportError, ReportErrorKind};
use crate::shell::auth::Principal;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(principal) = Principal::from_headers(&headers) {
        request = request.data(principal);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}

pub fn authorize(context: &async_graphql::Context<'_>, user_id: &str) -> async_graphql::Result<()> {
    let principal = context
        .data_opt::<Principal>()
        .ok_or_else(|| async_graphql::Error::new("unauthenticated").extend_with(|_, e| e.set("code", "UNAUTHENTICATED")))?;
    if !principal.can_access_user(user_id) {
        return Err(async_graphql::Error::new("forbidden").extend_with(|_, e| e.set("code", "FORBIDDEN")));
    }
    Ok(())
}

pub fn report_error(error: ReportError) -> async_graphql::Error {
    let code = match error.kind() {
        ReportErrorKind::InvalidArgument => "BAD_USER_INPUT",
        ReportErrorKind::NotFound => "NOT_FOUND",
        ReportErrorKind::StoreUnavailable => "STORE_UNAVAILABLE",
        ReportErrorKind::DeliveryFailure => "DELIVERY_FAILURE",
        ReportErrorKind::Internal => "INTERNAL",
    };
    async_graphql::Error::new(error.to_string()).extend_with(|_, e| e.set("code", code))
}
