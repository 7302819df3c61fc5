//! # sendpush-registry
//!
//! Access to the `device_tokens` table: lookup of a user's registrations
//! and deletion of dead tokens. The only mutation this crate exposes is
//! single-row deletion.

pub mod memory;
pub mod supabase;

use async_trait::async_trait;

use sendpush_core::AppResult;
use sendpush_entity::{DeviceRegistration, Platform};

pub use memory::MemoryDeviceRegistry;
pub use supabase::SupabaseDeviceRegistry;

/// Store of device registrations.
#[async_trait]
pub trait DeviceRegistry: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g., "supabase", "memory").
    fn backend(&self) -> &str;

    /// All registrations owned by `user_id` on `platform`.
    async fn find_by_user(
        &self,
        user_id: &str,
        platform: Platform,
    ) -> AppResult<Vec<DeviceRegistration>>;

    /// Delete the registration row for `token`. Returns the number of rows removed.
    async fn delete_token(&self, token: &str) -> AppResult<u64>;
}
