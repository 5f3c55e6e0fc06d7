use axum::extract::State;
use axum::Json;

use crate::server::error::ApiError;
use crate::server::state::SharedState;
use crate::tickets::stats::StatsReport;

/// GET /api/stats
pub async fn stats(State(state): State<SharedState>) -> Result<Json<StatsReport>, ApiError> {
    let tickets = state.read(|store| store.list_tickets()).await?;
    Ok(Json(StatsReport::from_tickets(&tickets)))
}
