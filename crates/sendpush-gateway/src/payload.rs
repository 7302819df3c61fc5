//! APNs notification payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use sendpush_entity::NotificationEvent;

/// Sound played for every notification.
pub const DEFAULT_SOUND: &str = "default";

/// Badge value set on every notification.
pub const DEFAULT_BADGE: u32 = 1;

/// Visible alert text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
}

/// The `aps` dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aps {
    /// Alert text.
    pub alert: Alert,
    /// Sound name.
    pub sound: String,
    /// App icon badge.
    pub badge: u32,
}

/// Full JSON body posted to `/3/device/<token>`.
///
/// Custom keys live at the top level next to `aps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushPayload {
    /// Apple-defined keys.
    pub aps: Aps,
    /// App-defined keys.
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl PushPayload {
    /// Build the payload for an event: alert, default sound, badge 1 and
    /// the event's deep link under `screen`.
    pub fn from_event(event: &NotificationEvent) -> Self {
        Self {
            aps: Aps {
                alert: Alert {
                    title: event.title.clone(),
                    body: event.message.clone(),
                },
                sound: DEFAULT_SOUND.to_string(),
                badge: DEFAULT_BADGE,
            },
            data: event.extra_data(),
        }
    }
}
