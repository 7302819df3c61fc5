//! Registration lookup and sequential per-device delivery.

use std::sync::Arc;

use tracing::debug;

use sendpush_auth::AuthToken;
use sendpush_core::{AppError, AppResult, ErrorKind};
use sendpush_entity::{DeliveryResult, DeviceRegistration, Platform};
use sendpush_gateway::{PushGateway, PushPayload};
use sendpush_registry::DeviceRegistry;

use super::janitor::RegistryJanitor;

/// Message returned when the registry cannot be queried.
pub const LOOKUP_FAILED: &str = "Error fetching device tokens";

/// Delivers one payload to every device of a user, one device at a time.
#[derive(Debug, Clone)]
pub struct FanOutDispatcher {
    registry: Arc<dyn DeviceRegistry>,
    gateway: Arc<dyn PushGateway>,
    janitor: RegistryJanitor,
    platform: Platform,
}

impl FanOutDispatcher {
    /// Creates a dispatcher targeting `platform` registrations.
    pub fn new(
        registry: Arc<dyn DeviceRegistry>,
        gateway: Arc<dyn PushGateway>,
        platform: Platform,
    ) -> Self {
        let janitor = RegistryJanitor::new(Arc::clone(&registry));
        Self {
            registry,
            gateway,
            janitor,
            platform,
        }
    }

    /// The platform whose registrations are addressed.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// All registrations of `user_id` on the target platform.
    ///
    /// Configuration errors pass through unchanged; any other failure
    /// becomes a lookup error with the underlying cause attached.
    pub async fn lookup(&self, user_id: &str) -> AppResult<Vec<DeviceRegistration>> {
        let registrations = self
            .registry
            .find_by_user(user_id, self.platform)
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Configuration => e,
                _ => AppError::with_source(ErrorKind::Lookup, LOOKUP_FAILED, e),
            })?;

        debug!(
            backend = self.registry.backend(),
            count = registrations.len(),
            "Registrations fetched"
        );
        Ok(registrations)
    }

    /// Attempt delivery to every registration exactly once, in order.
    ///
    /// Each attempt is followed by the janitor check for that token before
    /// the next device is tried. A failing device never stops the loop.
    pub async fn fan_out(
        &self,
        registrations: &[DeviceRegistration],
        payload: &PushPayload,
        auth: &AuthToken,
    ) -> Vec<DeliveryResult> {
        let mut results = Vec::with_capacity(registrations.len());

        for registration in registrations {
            let token = registration.token.as_str();
            let outcome = self.gateway.deliver(token, payload, auth).await;
            let verdict = self.janitor.inspect(token, &outcome).await;
            debug!(token, delivered = outcome.is_delivered(), ?verdict, "Device attempt finished");

            results.push(DeliveryResult::from_outcome(token, &outcome));
        }

        results
    }
}
