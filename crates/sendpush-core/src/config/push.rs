//! Notification content defaults.

use serde::{Deserialize, Serialize};

/// Settings applied when building the notification shown on the device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Title used when the notification record has none.
    #[serde(default = "default_title")]
    pub default_title: String,
    /// Device platform whose registrations this service delivers to.
    #[serde(default = "default_platform")]
    pub platform: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            platform: default_platform(),
        }
    }
}

fn default_title() -> String {
    "Nueva Notificación".to_string()
}

fn default_platform() -> String {
    "ios".to_string()
}
