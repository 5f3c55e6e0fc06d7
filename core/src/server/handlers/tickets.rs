use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::state::SharedState;
use crate::tickets::filters::TicketFilter;
use crate::tickets::model::{Assignee, Assignment, NewTicket, Ticket, TicketStatus, TicketUpdate};

/// Body of `PUT /api/tickets/{id}`.
///
/// `assigned_to_id` picks from the staff roster and wins over a manual
/// `assigned_to`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRequest {
    status: Option<TicketStatus>,
    assigned_to_id: Option<u32>,
    assigned_to: Option<Assignee>,
}

impl From<UpdateRequest> for TicketUpdate {
    fn from(request: UpdateRequest) -> Self {
        let assign = match (request.assigned_to_id, request.assigned_to) {
            (Some(id), _) => Some(Assignment::Staff(id)),
            (None, Some(assignee)) => Some(Assignment::Manual(assignee)),
            (None, None) => None,
        };
        TicketUpdate {
            status: request.status,
            assign,
        }
    }
}

/// GET /api/tickets?priority=&type=&status=&search=
pub async fn list_tickets(
    State(state): State<SharedState>,
    query: Result<Query<TicketFilter>, QueryRejection>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let Query(filter) = query?;
    let tickets = state.read(|store| store.list_tickets()).await?;
    if filter.is_empty() {
        return Ok(Json(tickets));
    }
    let found = filter.apply(&tickets).into_iter().cloned().collect();
    Ok(Json(found))
}

/// POST /api/tickets
pub async fn create_ticket(
    State(state): State<SharedState>,
    body: Result<Json<NewTicket>, JsonRejection>,
) -> Result<Json<Ticket>, ApiError> {
    let Json(form) = body?;
    let ticket = state.write(move |store| store.create_ticket(form)).await?;
    Ok(Json(ticket))
}

/// GET /api/tickets/{id}
pub async fn get_ticket(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, ApiError> {
    let ticket = state.read(move |store| store.get_ticket(&id)).await?;
    Ok(Json(ticket))
}

/// PUT /api/tickets/{id}
pub async fn update_ticket(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<Ticket>, ApiError> {
    let Json(request) = body?;
    let update = TicketUpdate::from(request);
    let ticket = state
        .write(move |store| store.update_ticket(&id, update))
        .await?;
    Ok(Json(ticket))
}

/// POST /api/tickets/{id}/resolve
pub async fn resolve_ticket(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, ApiError> {
    let ticket = state.write(move |store| store.resolve_ticket(&id)).await?;
    Ok(Json(ticket))
}
