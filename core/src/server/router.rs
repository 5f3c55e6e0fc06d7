//! Router construction with all route groups.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers::{classify, health, labels, staff, stats, tickets};
use super::middleware::log_request;
use super::state::SharedState;

/// Build the complete router with all REST routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // --- System ---
        .route("/health", get(health::health))
        .route("/info", get(health::info))
        // --- Classification ---
        .route("/classify", post(classify::classify))
        .route("/labels", get(labels::labels))
        // --- Tickets ---
        .route(
            "/api/tickets",
            get(tickets::list_tickets).post(tickets::create_ticket),
        )
        .route(
            "/api/tickets/{id}",
            get(tickets::get_ticket).put(tickets::update_ticket),
        )
        .route("/api/tickets/{id}/resolve", post(tickets::resolve_ticket))
        // --- Dashboard ---
        .route("/api/stats", get(stats::stats))
        // --- Staff ---
        .route(
            "/api/users/staff",
            get(staff::list_staff).post(staff::add_staff),
        )
        // --- Middleware ---
        .layer(axum::middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
