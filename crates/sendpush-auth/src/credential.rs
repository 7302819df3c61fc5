//! Static APNs signing credential.

use std::fmt;

use sendpush_core::config::ApnsConfig;

/// Secret material and identifiers used to mint provider tokens.
///
/// Never persisted; `Debug` output omits the key.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningCredential {
    /// Base64 text of the PEM framed PKCS#8 private key.
    pub private_key_base64: String,
    /// Key identifier, embedded as `kid` in the token header.
    pub key_id: String,
    /// Team identifier, embedded as the `iss` claim.
    pub team_id: String,
    /// Bundle identifier of the target app.
    pub bundle_id: String,
}

impl SigningCredential {
    /// Build the credential from the APNs configuration section.
    pub fn from_config(config: &ApnsConfig) -> Self {
        Self {
            private_key_base64: config.auth_key_base64.clone(),
            key_id: config.key_id.clone(),
            team_id: config.team_id.clone(),
            bundle_id: config.bundle_id.clone(),
        }
    }

    /// Whether the key material and both identifiers are present.
    pub fn is_complete(&self) -> bool {
        !self.private_key_base64.trim().is_empty()
            && !self.key_id.trim().is_empty()
            && !self.team_id.trim().is_empty()
    }
}

impl fmt::Debug for SigningCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredential")
            .field("key_id", &self.key_id)
            .field("team_id", &self.team_id)
            .field("bundle_id", &self.bundle_id)
            .finish_non_exhaustive()
    }
}
