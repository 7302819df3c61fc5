//! Device registry (Supabase REST) configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connection settings for the hosted `device_tokens` table.
#[derive(Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    #[serde(default)]
    pub url: String,
    /// Service role key. Bypasses row level security.
    #[serde(default)]
    pub service_role_key: String,
    /// Table holding device registrations.
    #[serde(default = "default_table")]
    pub table: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

impl SupabaseConfig {
    /// Returns `true` when both the URL and the service key are present.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.service_role_key.trim().is_empty()
    }
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            service_role_key: String::new(),
            table: default_table(),
            request_timeout_seconds: default_timeout(),
        }
    }
}

impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("service_role_key", &"<redacted>")
            .field("table", &self.table)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

fn default_table() -> String {
    "device_tokens".to_string()
}

fn default_timeout() -> u64 {
    10
}
