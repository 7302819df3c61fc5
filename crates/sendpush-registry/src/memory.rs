//! In-process registry used for local runs and tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use sendpush_core::AppResult;
use sendpush_entity::{DeviceRegistration, Platform};

use crate::DeviceRegistry;

/// Registry backed by a vector, preserving insertion order.
#[derive(Debug, Default)]
pub struct MemoryDeviceRegistry {
    rows: RwLock<Vec<DeviceRegistration>>,
}

impl MemoryDeviceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with `rows`.
    pub fn with_rows(rows: impl IntoIterator<Item = DeviceRegistration>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().collect()),
        }
    }

    /// Whether any row holds `token`.
    pub async fn contains(&self, token: &str) -> bool {
        self.rows.read().await.iter().any(|r| r.token == token)
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl DeviceRegistry for MemoryDeviceRegistry {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        platform: Platform,
    ) -> AppResult<Vec<DeviceRegistration>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id && r.platform == platform)
            .cloned()
            .collect())
    }

    async fn delete_token(&self, token: &str) -> AppResult<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.token != token);
        Ok((before - rows.len()) as u64)
    }
}
