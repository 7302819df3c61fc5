//! # sendpush-auth
//!
//! Provider authentication for the Apple Push Notification service.
//!
//! ## Modules
//!
//! - `credential` — the static signing credential taken from configuration
//! - `jwt` — key decoding, claims and ES256 token minting

pub mod credential;
pub mod jwt;

pub use credential::SigningCredential;
pub use jwt::{AuthToken, CredentialMinter, ProviderClaims};
