use clap::Parser;
use roster_service::config::Config;
use roster_service::router::create_router;
use roster_service::state::AppState;
use roster_service::validator::HttpTokenValidator;
use service_common::{server, telemetry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    telemetry::init();
    let config = Config::parse();

    tracing::info!(auth_url = %config.auth_url, "Starting Roster service");

    let validator = HttpTokenValidator::new(
        config.upstream.client()?,
        config.auth_url.clone(),
        config.upstream.retry_policy(),
    );
    let app = create_router(AppState::new(Arc::new(validator)));

    server::serve(config.listen, app).await
}
