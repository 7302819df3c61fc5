//! # sendpush-gateway
//!
//! Delivery of single notifications to the Apple Push Notification
//! service. One call is one bounded HTTP request; retries are left to
//! whoever invokes the dispatcher.

pub mod apns;
pub mod payload;

use async_trait::async_trait;

use sendpush_auth::AuthToken;
use sendpush_entity::DeliveryOutcome;

pub use apns::ApnsClient;
pub use payload::{Alert, Aps, PushPayload};

/// A push gateway able to deliver one payload to one device.
#[async_trait]
pub trait PushGateway: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver `payload` to `device_token`, authenticating with `auth`.
    ///
    /// Failures are reported through the outcome, never as an error, so a
    /// bad device cannot stop delivery to the others.
    async fn deliver(
        &self,
        device_token: &str,
        payload: &PushPayload,
        auth: &AuthToken,
    ) -> DeliveryOutcome;
}
