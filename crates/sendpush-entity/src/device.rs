//! Device registrations and push platforms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform an app installation registered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iPhone / iPad, delivered through APNs.
    Ios,
    /// Android devices.
    Android,
    /// Browser push subscriptions.
    Web,
}

impl Platform {
    /// Return the platform as stored in the registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Web => "web",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = sendpush_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "web" => Ok(Self::Web),
            _ => Err(sendpush_core::AppError::configuration(format!(
                "Invalid platform: '{s}'. Expected one of: ios, android, web"
            ))),
        }
    }
}

/// One installed app instance that can receive pushes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRegistration {
    /// Opaque gateway address of the installation.
    pub token: String,
    /// Owner of the device.
    pub user_id: String,
    /// Platform the token belongs to.
    pub platform: Platform,
}

impl DeviceRegistration {
    /// Creates a registration.
    pub fn new(token: impl Into<String>, user_id: impl Into<String>, platform: Platform) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            platform,
        }
    }
}
