//! Claims of an APNs provider token.

use serde::{Deserialize, Serialize};

/// APNs only reads the issuer and the issue time; the gateway rejects
/// tokens older than one hour on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderClaims {
    /// Issuer — the developer team ID.
    pub iss: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
}
