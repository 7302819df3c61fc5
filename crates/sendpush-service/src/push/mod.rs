//! Push notification dispatch.

pub mod dispatcher;
pub mod janitor;
pub mod report;
pub mod service;

pub use dispatcher::FanOutDispatcher;
pub use janitor::{JanitorVerdict, RegistryJanitor, is_permanently_dead};
pub use report::DispatchReport;
pub use service::SendPushService;

#[cfg(test)]
pub(crate) mod testing;
