//! # sendpush-entity
//!
//! Domain models shared by the registry, gateway, service and API crates.

pub mod delivery;
pub mod device;
pub mod notification;

pub use delivery::{DeliveryOutcome, DeliveryResult};
pub use device::{DeviceRegistration, Platform};
pub use notification::NotificationEvent;
