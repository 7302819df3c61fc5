//! APNs credential and endpoint configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Production APNs host.
pub const PRODUCTION_ENDPOINT: &str = "https://api.push.apple.com";

/// Sandbox APNs host.
pub const SANDBOX_ENDPOINT: &str = "https://api.development.push.apple.com";

/// Token-based APNs authentication settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApnsConfig {
    /// Key identifier of the `.p8` signing key.
    #[serde(default)]
    pub key_id: String,
    /// Apple developer team identifier (JWT issuer).
    #[serde(default)]
    pub team_id: String,
    /// App bundle identifier, sent as `apns-topic`.
    #[serde(default = "default_bundle_id")]
    pub bundle_id: String,
    /// Base64 of the PEM encoded PKCS#8 private key.
    #[serde(default)]
    pub auth_key_base64: String,
    /// Use the production gateway instead of the sandbox.
    #[serde(default)]
    pub is_production: bool,
    /// Overrides the gateway endpoint entirely.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

impl ApnsConfig {
    /// Resolves the gateway endpoint this configuration targets.
    pub fn endpoint(&self) -> &str {
        match self.base_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/'),
            _ if self.is_production => PRODUCTION_ENDPOINT,
            _ => SANDBOX_ENDPOINT,
        }
    }
}

impl Default for ApnsConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            team_id: String::new(),
            bundle_id: default_bundle_id(),
            auth_key_base64: String::new(),
            is_production: false,
            base_url: None,
            request_timeout_seconds: default_timeout(),
        }
    }
}

impl fmt::Debug for ApnsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApnsConfig")
            .field("key_id", &self.key_id)
            .field("team_id", &self.team_id)
            .field("bundle_id", &self.bundle_id)
            .field("auth_key_base64", &"<redacted>")
            .field("is_production", &self.is_production)
            .field("base_url", &self.base_url)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

fn default_bundle_id() -> String {
    "com.antigravity.APEGWV".to_string()
}

fn default_timeout() -> u64 {
    10
}
