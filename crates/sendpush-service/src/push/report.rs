//! Aggregate result of one dispatch invocation.

use sendpush_entity::DeliveryResult;

/// How an invocation ended when it did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchReport {
    /// The user has no registered devices on the target platform.
    NoRecipients,
    /// One entry per registered device, in lookup order.
    Dispatched(Vec<DeliveryResult>),
}

impl DispatchReport {
    /// Per-device results; empty when there were no recipients.
    pub fn results(&self) -> &[DeliveryResult] {
        match self {
            Self::NoRecipients => &[],
            Self::Dispatched(results) => results,
        }
    }

    /// Number of devices that accepted the notification.
    pub fn delivered_count(&self) -> usize {
        self.results().iter().filter(|r| r.success).count()
    }
}
