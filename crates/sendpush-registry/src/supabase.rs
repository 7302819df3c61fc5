//! Supabase (PostgREST) backed device registry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use sendpush_core::config::SupabaseConfig;
use sendpush_core::{AppError, AppResult, ErrorKind};
use sendpush_entity::{DeviceRegistration, Platform};

use crate::DeviceRegistry;

/// Error message for a missing project URL or service key.
pub const MISSING_CONFIGURATION: &str = "Missing Supabase URL or Service Role Key";

/// Columns selected for every registration lookup.
const SELECT_COLUMNS: &str = "token,user_id,platform";

/// Registry that talks to the hosted `device_tokens` table over REST,
/// authenticated with the service role key.
#[derive(Clone)]
pub struct SupabaseDeviceRegistry {
    client: Client,
    config: SupabaseConfig,
}

impl std::fmt::Debug for SupabaseDeviceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseDeviceRegistry")
            .field("config", &self.config)
            .finish()
    }
}

impl SupabaseDeviceRegistry {
    /// Create a registry client.
    ///
    /// Missing credentials are not rejected here; every call reports them
    /// as a configuration error instead so the service can still start.
    pub fn new(config: &SupabaseConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build registry HTTP client", e)
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn table_url(&self) -> AppResult<Url> {
        if !self.config.is_configured() {
            return Err(AppError::configuration(MISSING_CONFIGURATION));
        }

        let raw = format!(
            "{}/rest/v1/{}",
            self.config.url.trim().trim_end_matches('/'),
            self.config.table
        );
        Url::parse(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid Supabase URL '{}'", self.config.url),
                e,
            )
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let key = self.config.service_role_key.trim();
        request
            .header("apikey", key)
            .header("authorization", format!("Bearer {key}"))
    }
}

#[async_trait]
impl DeviceRegistry for SupabaseDeviceRegistry {
    fn backend(&self) -> &str {
        "supabase"
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        platform: Platform,
    ) -> AppResult<Vec<DeviceRegistration>> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("select", SELECT_COLUMNS)
            .append_pair("user_id", &format!("eq.{user_id}"))
            .append_pair("platform", &format!("eq.{}", platform.as_str()));

        let response = self
            .authorize(self.client.get(url))
            .send()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Lookup, "Registry request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::lookup(format!(
                "Registry lookup returned {}: {body}",
                status.as_u16()
            )));
        }

        let rows: Vec<DeviceRegistration> = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Lookup, "Malformed registry response", e)
        })?;

        debug!(user_id, count = rows.len(), "Fetched device registrations");
        Ok(rows)
    }

    async fn delete_token(&self, token: &str) -> AppResult<u64> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("token", &format!("eq.{token}"));

        let response = self
            .authorize(self.client.delete(url))
            .header("prefer", "return=representation")
            .send()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Cleanup, "Registry request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::cleanup(format!(
                "Registry delete returned {}: {body}",
                status.as_u16()
            )));
        }

        // PostgREST echoes the removed rows; an empty body means nothing matched.
        let body = response.text().await.unwrap_or_default();
        let removed = serde_json::from_str::<Vec<serde_json::Value>>(&body)
            .map(|rows| rows.len() as u64)
            .unwrap_or(0);
        Ok(removed)
    }
}
