//! Provider token creation: key decoding, claims and signing.

pub mod claims;
pub mod key;
pub mod minter;

pub use claims::ProviderClaims;
pub use key::decode_signing_key;
pub use minter::{AuthToken, CredentialMinter};
