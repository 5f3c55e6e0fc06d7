use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::state::SharedState;
use crate::tickets::model::StaffMember;

#[derive(Deserialize)]
pub struct NewStaffRequest {
    name: String,
    email: String,
    #[serde(default)]
    puesto: String,
    #[serde(default)]
    area: String,
}

/// GET /api/users/staff
pub async fn list_staff(
    State(state): State<SharedState>,
) -> Result<Json<Vec<StaffMember>>, ApiError> {
    let staff = state.read(|store| store.list_staff()).await?;
    Ok(Json(staff))
}

/// POST /api/users/staff
pub async fn add_staff(
    State(state): State<SharedState>,
    body: Result<Json<NewStaffRequest>, JsonRejection>,
) -> Result<Json<StaffMember>, ApiError> {
    let Json(request) = body?;
    let member = state
        .write(move |store| {
            store.add_staff(
                &request.name,
                &request.email,
                &request.puesto,
                &request.area,
            )
        })
        .await?;
    log::info!("[server] Added staff member {} ({})", member.id, member.name);
    Ok(Json(member))
}
