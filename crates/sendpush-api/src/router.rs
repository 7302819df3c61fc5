//! Route definitions for the send-push HTTP API.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and request-level middleware.
///
/// The webhook is mounted both at `/send-push` and at the path the hosted
/// function used (`/functions/v1/send-push`) so existing triggers keep
/// working.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    Router::new()
        .route("/send-push", post(handlers::send_push::send_push))
        .route("/functions/v1/send-push", post(handlers::send_push::send_push))
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}
