use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::server::error::ApiError;
use crate::server::state::SharedState;

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

#[derive(Serialize)]
pub struct InfoResponse {
    name: &'static str,
    version: &'static str,
    tickets: usize,
}

/// GET /info
pub async fn info(State(state): State<SharedState>) -> Result<Json<InfoResponse>, ApiError> {
    let tickets = state.read(|store| Ok(store.load()?.tickets.len())).await?;
    Ok(Json(InfoResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        tickets,
    }))
}
