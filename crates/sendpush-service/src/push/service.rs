//! One dispatch invocation, from webhook body to aggregate report.

use serde_json::Value;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use sendpush_auth::CredentialMinter;
use sendpush_core::{AppError, AppResult, ErrorKind};
use sendpush_entity::NotificationEvent;
use sendpush_gateway::PushPayload;

use super::dispatcher::FanOutDispatcher;
use super::report::DispatchReport;

/// Prefix of the error returned when the provider token cannot be minted.
pub const CONFIGURATION_ERROR_PREFIX: &str = "APNs Configuration Error: ";

/// Orchestrates credential minting, fan-out and cleanup for one event.
#[derive(Debug, Clone)]
pub struct SendPushService {
    minter: CredentialMinter,
    dispatcher: FanOutDispatcher,
    default_title: String,
}

impl SendPushService {
    /// Creates the service.
    pub fn new(
        minter: CredentialMinter,
        dispatcher: FanOutDispatcher,
        default_title: impl Into<String>,
    ) -> Self {
        Self {
            minter,
            dispatcher,
            default_title: default_title.into(),
        }
    }

    /// Handles a raw webhook body (`{ "record": { ... } }`).
    pub async fn handle_webhook(&self, payload: &Value) -> AppResult<DispatchReport> {
        let event = NotificationEvent::from_webhook(payload, &self.default_title)?;
        self.dispatch(&event).await
    }

    /// Runs one dispatch cycle for `event`.
    ///
    /// Lookup and minting failures abort before any delivery. Per-device
    /// failures only show up in the report.
    pub async fn dispatch(&self, event: &NotificationEvent) -> AppResult<DispatchReport> {
        let span = info_span!(
            "dispatch",
            invocation_id = %Uuid::new_v4(),
            user_id = %event.user_id,
        );
        self.run(event).instrument(span).await
    }

    async fn run(&self, event: &NotificationEvent) -> AppResult<DispatchReport> {
        let registrations = self.dispatcher.lookup(&event.user_id).await.map_err(|e| {
            error!(error = %e, source = ?e.source, "Error fetching tokens");
            e
        })?;

        if registrations.is_empty() {
            info!(
                platform = %self.dispatcher.platform(),
                "No device tokens found for user"
            );
            return Ok(DispatchReport::NoRecipients);
        }

        let auth = self.minter.mint().map_err(|e| {
            error!(error = %e, "Error generating APNs token");
            let message = format!("{CONFIGURATION_ERROR_PREFIX}{}", e.message);
            AppError::with_source(ErrorKind::Configuration, message, e)
        })?;

        let payload = PushPayload::from_event(event);
        let results = self.dispatcher.fan_out(&registrations, &payload, &auth).await;

        let report = DispatchReport::Dispatched(results);
        info!(
            devices = registrations.len(),
            delivered = report.delivered_count(),
            "Dispatch finished"
        );
        Ok(report)
    }
}
