//! HTTP API for the ticket portal and the staff dashboard.

mod error;
mod handlers;
mod middleware;
mod router;
mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, SharedState};

use crate::config::ServerConfig;
use anyhow::Context;

/// Bind `config.addr()` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config).shared();
    let app = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("[server] Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("[server] Failed to listen for shutdown signal: {e}");
            }
            log::info!("[server] Shutting down");
        })
        .await?;

    Ok(())
}
