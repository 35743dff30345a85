use clap::Parser;
use directions_service::config::Config;
use directions_service::google::GoogleDirections;
use directions_service::router::create_router;
use directions_service::state::AppState;
use service_common::{server, telemetry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    telemetry::init();
    let config = Config::parse();

    tracing::info!(maps_url = %config.maps_base_url, region = %config.maps_region, "Starting Directions service");
    anyhow::ensure!(!config.maps_api_key.is_empty(), "MAPS_API_KEY must not be empty");

    let provider = GoogleDirections::new(
        config.upstream.client()?,
        config.maps_base_url.clone(),
        config.maps_api_key.clone(),
        config.maps_region.clone(),
    );
    let app = create_router(AppState::new(Arc::new(provider)));

    server::serve(config.listen, app).await
}
