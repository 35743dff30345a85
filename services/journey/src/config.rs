use clap::Parser;
use reqwest::Url;
use service_common::upstream::UpstreamArgs;
use std::net::SocketAddr;

/// Journey service configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "journey-service", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "JOURNEY_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Base URL of the directions service
    #[arg(long, env = "DIRECTIONS_SERVICE_URL", default_value = "http://directions-service:8000")]
    pub directions_url: Url,

    /// Base URL of the roster service
    #[arg(long, env = "ROSTER_SERVICE_URL", default_value = "http://roster-service:8000")]
    pub roster_url: Url,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}
