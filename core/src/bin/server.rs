//! triage-server binary - HTTP API for the ticket portal and staff dashboard.

use anyhow::Context;
use triage::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    triage::server::serve(config).await
}
