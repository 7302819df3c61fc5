//! Per-device delivery outcomes.

use serde::{Deserialize, Serialize};

/// Marker APNs puts in the body for tokens that no longer exist.
pub const UNREGISTERED_MARKER: &str = "Unregistered";

/// HTTP status APNs answers for tokens that are no longer active.
pub const STATUS_GONE: u16 = 410;

/// What happened to a single delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The gateway accepted the notification.
    Delivered,
    /// The gateway answered with a non-success status.
    Rejected {
        /// HTTP status of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// No response was received (connect error, timeout, ...).
    Unreachable {
        /// Transport error description.
        error: String,
    },
}

impl DeliveryOutcome {
    /// Returns `true` if the notification was accepted.
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Returns `true` when the gateway says this token will never accept
    /// pushes again: status 410, or an `Unregistered` reason in the body.
    ///
    /// Rate limiting, bad payloads, auth failures and transport errors are
    /// never treated as dead tokens.
    pub fn is_permanently_dead(&self) -> bool {
        match self {
            Self::Rejected { status, body } => {
                *status == STATUS_GONE || body.contains(UNREGISTERED_MARKER)
            }
            Self::Delivered | Self::Unreachable { .. } => false,
        }
    }
}

/// Result entry reported back to the caller for one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryResult {
    /// Device token the attempt targeted.
    pub token: String,
    /// Whether the gateway accepted the notification.
    pub success: bool,
    /// Gateway status, present on rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Raw gateway error body or transport error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryResult {
    /// Builds the reported entry for `token` from its outcome.
    pub fn from_outcome(token: impl Into<String>, outcome: &DeliveryOutcome) -> Self {
        let token = token.into();
        match outcome {
            DeliveryOutcome::Delivered => Self {
                token,
                success: true,
                status: None,
                error: None,
            },
            DeliveryOutcome::Rejected { status, body } => Self {
                token,
                success: false,
                status: Some(*status),
                error: Some(body.clone()),
            },
            DeliveryOutcome::Unreachable { error } => Self {
                token,
                success: false,
                status: None,
                error: Some(error.clone()),
            },
        }
    }
}
