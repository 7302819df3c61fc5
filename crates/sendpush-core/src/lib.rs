//! # sendpush-core
//!
//! Core crate for the send-push dispatcher. Contains the configuration
//! schemas and the unified error system.
//!
//! This crate has **no** internal dependencies on other send-push crates.

pub mod config;
pub mod error;
pub mod result;

pub use config::AppConfig;
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
