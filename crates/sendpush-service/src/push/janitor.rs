//! Removal of registrations the gateway reports as permanently dead.

use std::sync::Arc;

use tracing::{info, warn};

use sendpush_entity::DeliveryOutcome;
use sendpush_registry::DeviceRegistry;

/// Pure dead-token rule: status 410, or an `Unregistered` reason in the body.
pub fn is_permanently_dead(outcome: &DeliveryOutcome) -> bool {
    outcome.is_permanently_dead()
}

/// What the janitor did with one delivery outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JanitorVerdict {
    /// The token is still considered valid; nothing was touched.
    Kept,
    /// The dead token's row was deleted.
    Removed,
    /// The token is dead but deleting it failed. Logged and absorbed.
    RemovalFailed,
}

/// Keeps the registry in line with what the gateway knows about devices.
#[derive(Debug, Clone)]
pub struct RegistryJanitor {
    registry: Arc<dyn DeviceRegistry>,
}

impl RegistryJanitor {
    /// Creates a janitor over `registry`.
    pub fn new(registry: Arc<dyn DeviceRegistry>) -> Self {
        Self { registry }
    }

    /// Inspect one outcome and delete the token's row if it is dead.
    ///
    /// Never fails: the notification has already been attempted, so a
    /// failed delete is only logged.
    pub async fn inspect(&self, token: &str, outcome: &DeliveryOutcome) -> JanitorVerdict {
        if !is_permanently_dead(outcome) {
            return JanitorVerdict::Kept;
        }

        info!(token, "Token is unregistered, deleting from registry");
        match self.registry.delete_token(token).await {
            Ok(_) => JanitorVerdict::Removed,
            Err(e) => {
                warn!(token, error = %e, "Failed to delete unregistered token");
                JanitorVerdict::RemovalFailed
            }
        }
    }
}
