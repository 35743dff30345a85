use auth_service::bootstrap;
use auth_service::config::Config;
use auth_service::credentials::CredentialStore;
use auth_service::router::create_router;
use auth_service::state::AppState;
use auth_service::token::TokenService;
use clap::Parser;
use service_common::clock::SystemClock;
use service_common::{server, telemetry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    telemetry::init();
    let config = Config::parse();

    tracing::info!("Starting Auth service");
    anyhow::ensure!(!config.jwt_secret.is_empty(), "AUTH_JWT_SECRET must not be empty");

    let mut credentials = CredentialStore::new()?;
    let seeds = bootstrap::load_seeds(config.accounts_file.as_deref())?;
    bootstrap::register_all(&mut credentials, seeds)?;

    let tokens = TokenService::new(config.jwt_secret.as_bytes(), credentials, Arc::new(SystemClock));
    let app = create_router(AppState::new(tokens));

    server::serve(config.listen, app).await
}
