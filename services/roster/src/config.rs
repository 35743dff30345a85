use clap::Parser;
use reqwest::Url;
use service_common::upstream::UpstreamArgs;
use std::net::SocketAddr;

/// Roster service configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "roster-service", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "ROSTER_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Base URL of the auth service
    #[arg(long, env = "AUTH_SERVICE_URL", default_value = "http://auth-service:8000")]
    pub auth_url: Url,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}
