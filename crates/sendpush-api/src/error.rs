//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sendpush_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiErrorResponse;

/// Error returned by handlers. Renders as `{ "error": <message> }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Input => StatusCode::BAD_REQUEST,
            ErrorKind::Configuration
            | ErrorKind::Lookup
            | ErrorKind::Delivery
            | ErrorKind::Cleanup
            | ErrorKind::Serialization
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Dispatch failed");
        }

        let body = ApiErrorResponse {
            error: self.0.message,
        };

        (status, Json(body)).into_response()
    }
}
