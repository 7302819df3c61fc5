//! # sendpush-api
//!
//! HTTP surface of the send-push dispatcher built on Axum: the webhook
//! endpoint, a health probe, request logging and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;
