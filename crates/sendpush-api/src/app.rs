//! Application builder: wires configuration into the dispatch pipeline
//! and the pipeline into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use sendpush_auth::{CredentialMinter, SigningCredential};
use sendpush_core::AppResult;
use sendpush_core::config::AppConfig;
use sendpush_entity::Platform;
use sendpush_gateway::ApnsClient;
use sendpush_registry::SupabaseDeviceRegistry;
use sendpush_service::{FanOutDispatcher, SendPushService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state).layer(TraceLayer::new_for_http())
}

/// Builds the production state: PostgREST registry, APNs client and
/// provider-token minter, all driven by `config`.
///
/// Missing Supabase or APNs secrets do not fail here; they are reported
/// per invocation.
pub fn build_state(config: AppConfig) -> AppResult<AppState> {
    let platform: Platform = config.push.platform.parse()?;

    let registry = Arc::new(SupabaseDeviceRegistry::new(&config.supabase)?);
    let gateway = Arc::new(ApnsClient::new(&config.apns)?);
    let minter = CredentialMinter::new(SigningCredential::from_config(&config.apns));

    tracing::info!(
        endpoint = %gateway.endpoint(),
        platform = %platform,
        supabase_configured = config.supabase.is_configured(),
        "Dispatch pipeline ready"
    );

    let dispatcher = FanOutDispatcher::new(registry, gateway, platform);
    let service = SendPushService::new(minter, dispatcher, config.push.default_title.clone());

    Ok(AppState {
        config: Arc::new(config),
        send_push: Arc::new(service),
    })
}
