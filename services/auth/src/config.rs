use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Token service configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "auth-service", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "AUTH_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Shared HMAC secret used to sign tokens
    #[arg(long, env = "AUTH_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// JSON file of `[{username, name, password}]` accounts to seed
    #[arg(long, env = "AUTH_ACCOUNTS_FILE")]
    pub accounts_file: Option<PathBuf>,
}
