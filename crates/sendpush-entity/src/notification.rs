//! Notification events consumed from the upstream webhook.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sendpush_core::AppError;

/// Message returned when the webhook body does not name a recipient.
pub const MISSING_RECIPIENT: &str = "Missing record or user_id";

/// A notification addressed to one user.
///
/// Built once per invocation from the `record` of a database webhook and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// Recipient user ID.
    pub user_id: String,
    /// Visible title.
    pub title: String,
    /// Visible body.
    pub message: String,
    /// Optional in-app deep link.
    pub link: Option<String>,
}

impl NotificationEvent {
    /// Extracts the event from a webhook body of the form `{ "record": { ... } }`.
    ///
    /// Other webhook fields (`type`, `table`, `old_record`, ...) are ignored.
    /// A missing or empty `title` falls back to `default_title`.
    pub fn from_webhook(payload: &Value, default_title: &str) -> Result<Self, AppError> {
        let record = payload
            .get("record")
            .filter(|r| r.is_object())
            .ok_or_else(|| AppError::input(MISSING_RECIPIENT))?;

        let user_id = match record.get("user_id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
            _ => return Err(AppError::input(MISSING_RECIPIENT)),
        };

        Ok(Self {
            user_id,
            title: non_empty_str(record, "title").unwrap_or_else(|| default_title.to_string()),
            message: non_empty_str(record, "message").unwrap_or_default(),
            link: non_empty_str(record, "link"),
        })
    }

    /// Custom payload keys delivered next to the alert.
    pub fn extra_data(&self) -> serde_json::Map<String, Value> {
        let mut data = serde_json::Map::new();
        data.insert(
            "screen".to_string(),
            Value::String(self.link.clone().unwrap_or_default()),
        );
        data
    }
}

fn non_empty_str(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
