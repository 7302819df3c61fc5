//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sendpush_core::config::AppConfig;
use sendpush_service::SendPushService;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Dispatch pipeline behind `POST /send-push`.
    pub send_push: Arc<SendPushService>,
}
