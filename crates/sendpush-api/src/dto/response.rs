//! Response DTOs.

use serde::{Deserialize, Serialize};

use sendpush_entity::DeliveryResult;
use sendpush_service::DispatchReport;

/// Message returned when the user has no registered iOS devices.
pub const NO_RECIPIENTS_MESSAGE: &str = "No iOS device tokens found for this user.";

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
}

/// Successful `/send-push` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SendPushResponse {
    /// Per-device outcomes.
    Results {
        /// One entry per device, in delivery order.
        results: Vec<DeliveryResult>,
    },
    /// Nothing to deliver.
    Message {
        /// Explanation.
        message: String,
    },
}

impl From<DispatchReport> for SendPushResponse {
    fn from(report: DispatchReport) -> Self {
        match report {
            DispatchReport::NoRecipients => Self::Message {
                message: NO_RECIPIENTS_MESSAGE.to_string(),
            },
            DispatchReport::Dispatched(results) => Self::Results { results },
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}
