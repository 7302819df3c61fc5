//! # sendpush-service
//!
//! Dispatch logic: registration lookup, per-device fan-out, dead-token
//! cleanup, and the invocation-level orchestration tying them to the
//! credential minter.

pub mod push;

pub use push::{DispatchReport, FanOutDispatcher, JanitorVerdict, RegistryJanitor, SendPushService};
