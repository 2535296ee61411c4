use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use worklog_reports::modules::work_logs::adapters::outbound::work_log_store_in_memory::InMemoryWorkLogStore;
use worklog_reports::shared::infrastructure::mailer::in_memory::InMemoryMailer;
use worklog_reports::shell::config::AppConfig;
use worklog_reports::shell::http::router;
use worklog_reports::shell::seed::load_work_log_seed;
use worklog_reports::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let seed = match &config.work_log_seed_file {
        Some(path) => load_work_log_seed(path).await?,
        None => Vec::new(),
    };
    tracing::info!(rows = seed.len(), "work log store ready");
    let store = Arc::new(InMemoryWorkLogStore::with_rows(seed));
    let mailer = Arc::new(InMemoryMailer::new());

    let state = AppState::new(store, mailer, config.report_zone.name());
    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!(
        zone = config.report_zone.name(),
        "report endpoints: http://{}/reports/monthly, GraphQL: http://{}/gql",
        config.bind_address,
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
