//! Application configuration schemas.
//!
//! Configuration is merged from `config/default.toml`, an environment
//! overlay `config/<env>.toml`, `SENDPUSH__SECTION__KEY` environment
//! variables and, last, the flat secret names the function has always been
//! deployed with (`APNS_KEY_ID`, `SUPABASE_URL`, ...).

pub mod apns;
pub mod app;
pub mod logging;
pub mod push;
pub mod supabase;

use serde::{Deserialize, Serialize};

pub use self::apns::ApnsConfig;
pub use self::app::ServerConfig;
pub use self::logging::LoggingConfig;
pub use self::push::PushConfig;
pub use self::supabase::SupabaseConfig;

use crate::error::AppError;

/// Flat environment variables and the config keys they override.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("APNS_KEY_ID", "apns.key_id"),
    ("APNS_TEAM_ID", "apns.team_id"),
    ("APNS_BUNDLE_ID", "apns.bundle_id"),
    ("APNS_AUTH_KEY_BASE64", "apns.auth_key_base64"),
    ("SUPABASE_URL", "supabase.url"),
    ("SUPABASE_SERVICE_ROLE_KEY", "supabase.service_role_key"),
];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// APNs signing credential and endpoint.
    #[serde(default)]
    pub apns: ApnsConfig,
    /// Device registry connection.
    #[serde(default)]
    pub supabase: SupabaseConfig,
    /// Notification content defaults.
    #[serde(default)]
    pub push: PushConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and the process environment.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_with(env, |name| std::env::var(name).ok())
    }

    /// Load configuration, resolving the flat secret variables through `lookup`.
    pub fn load_with<F>(env: &str, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SENDPUSH")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in LEGACY_ENV_KEYS {
            let value = lookup(var).filter(|v| !v.is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        // Anything but the literal "true" selects the sandbox.
        let is_production = lookup("APNS_IS_PRODUCTION").map(|v| v == "true");
        builder = builder.set_override_option("apns.is_production", is_production)?;

        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
