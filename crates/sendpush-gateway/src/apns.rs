//! HTTP/2 client for the APNs provider API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, error};

use sendpush_auth::AuthToken;
use sendpush_core::config::ApnsConfig;
use sendpush_core::{AppError, AppResult, ErrorKind};
use sendpush_entity::DeliveryOutcome;

use crate::PushGateway;
use crate::payload::PushPayload;

/// Sends notifications through `POST /3/device/<token>`.
#[derive(Debug, Clone)]
pub struct ApnsClient {
    client: Client,
    endpoint: Url,
    topic: String,
}

impl ApnsClient {
    /// Create a client for the endpoint and bundle selected by `config`.
    pub fn new(config: &ApnsConfig) -> AppResult<Self> {
        let raw = config.endpoint();
        let endpoint = Url::parse(raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid APNs endpoint '{raw}'"),
                e,
            )
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "Invalid APNs endpoint '{raw}'"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build APNs HTTP client", e)
            })?;

        Ok(Self {
            client,
            endpoint,
            topic: config.bundle_id.clone(),
        })
    }

    /// The gateway base URL in use.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// `{endpoint}/3/device/<token>`, with the token escaped as one path segment.
    fn device_url(&self, device_token: &str) -> AppResult<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::configuration("APNs endpoint cannot carry a path"))?
            .pop_if_empty()
            .extend(["3", "device", device_token]);
        Ok(url)
    }
}

#[async_trait]
impl PushGateway for ApnsClient {
    async fn deliver(
        &self,
        device_token: &str,
        payload: &PushPayload,
        auth: &AuthToken,
    ) -> DeliveryOutcome {
        let url = match self.device_url(device_token) {
            Ok(url) => url,
            Err(e) => {
                error!(device_token, error = %e, "Failed to build APNs URL");
                return DeliveryOutcome::Unreachable { error: e.message };
            }
        };

        let result = self
            .client
            .post(url)
            .header("authorization", auth.authorization_header())
            .header("apns-topic", &self.topic)
            .header("apns-push-type", "alert")
            .header("apns-expiration", "0")
            .header("apns-priority", "10")
            .json(payload)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                error!(device_token, error = %e, "Failed to reach APNs");
                return DeliveryOutcome::Unreachable {
                    error: e.to_string(),
                };
            }
        };

        let status = response.status();
        if status.is_success() {
            debug!(device_token, "Push delivered");
            return DeliveryOutcome::Delivered;
        }

        let body = response.text().await.unwrap_or_default();
        error!(
            device_token,
            status = status.as_u16(),
            body = %body,
            "Failed to send push"
        );
        DeliveryOutcome::Rejected {
            status: status.as_u16(),
            body,
        }
    }
}
