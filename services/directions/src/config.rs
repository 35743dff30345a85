use clap::Parser;
use reqwest::Url;
use service_common::upstream::UpstreamArgs;
use std::net::SocketAddr;

/// Directions service configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "directions-service", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "DIRECTIONS_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Google Maps API key
    #[arg(long, env = "MAPS_API_KEY", hide_env_values = true)]
    pub maps_api_key: String,

    #[arg(long, env = "MAPS_BASE_URL", default_value = "https://maps.googleapis.com")]
    pub maps_base_url: Url,

    /// Region bias passed to the directions lookup
    #[arg(long, env = "MAPS_REGION", default_value = "uk")]
    pub maps_region: String,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}
