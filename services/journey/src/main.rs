use clap::Parser;
use journey_service::config::Config;
use journey_service::planner::JourneyPlanner;
use journey_service::router::create_router;
use journey_service::sources::{DirectionsClient, RosterClient};
use journey_service::state::AppState;
use pricing_engine::PricingEngine;
use service_common::clock::SystemClock;
use service_common::{server, telemetry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    telemetry::init();
    let config = Config::parse();

    tracing::info!(
        directions_url = %config.directions_url,
        roster_url = %config.roster_url,
        "Starting Journey service",
    );

    let client = config.upstream.client()?;
    let retry = config.upstream.retry_policy();
    let planner = JourneyPlanner::new(
        Arc::new(DirectionsClient::new(client.clone(), config.directions_url.clone(), retry)),
        Arc::new(RosterClient::new(client, config.roster_url.clone(), retry)),
        PricingEngine::new(),
        Arc::new(SystemClock),
    );
    let app = create_router(AppState::new(planner));

    server::serve(config.listen, app).await
}
