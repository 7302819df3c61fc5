//! Webhook entry point.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::Value;

use sendpush_core::AppError;

use crate::dto::response::SendPushResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Body returned when the request is not JSON.
pub const INVALID_JSON: &str = "Invalid JSON payload";

/// POST /send-push
///
/// Accepts a database webhook body (`{ "record": { "user_id", ... } }`)
/// and fans the notification out to the user's iOS devices.
pub async fn send_push(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SendPushResponse>, ApiError> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|_| AppError::input(INVALID_JSON))?;

    let report = state.send_push.handle_webhook(&payload).await?;
    Ok(Json(SendPushResponse::from(report)))
}
