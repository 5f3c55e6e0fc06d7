//! Middleware for the HTTP API.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::debug;

/// Log every request method and path, and the response status.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    debug!("{} {}", method, path);
    let response = next.run(request).await;
    if response.status().is_server_error() {
        log::warn!("[server] {} {} -> {}", method, path, response.status());
    }
    response
}
