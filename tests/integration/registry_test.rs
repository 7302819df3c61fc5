//! Integration tests for dispatch against a PostgREST device registry.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sendpush_core::config::SupabaseConfig;
use sendpush_registry::SupabaseDeviceRegistry;

use crate::helpers::{TestApp, supabase_registry};

const TABLE_PATH: &str = "/rest/v1/device_tokens";

async fn mount_lookup(postgrest: &MockServer, rows: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("user_id", "eq.u1"))
        .and(query_param("platform", "eq.ios"))
        .and(header("apikey", "service-role-key"))
        .and(header("authorization", "Bearer service-role-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .expect(1)
        .mount(postgrest)
        .await;
}

#[tokio::test]
async fn test_gone_token_is_deleted_from_postgrest() {
    let postgrest = MockServer::start().await;
    mount_lookup(
        &postgrest,
        json!([
            { "token": "A", "user_id": "u1", "platform": "ios" },
            { "token": "B", "user_id": "u1", "platform": "ios" },
        ]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path(TABLE_PATH))
        .and(query_param("token", "eq.B"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "token": "B", "user_id": "u1", "platform": "ios" }])),
        )
        .expect(1)
        .mount(&postgrest)
        .await;

    let app = TestApp::new(supabase_registry(&postgrest)).await;
    Mock::given(method("POST"))
        .and(path("/3/device/A"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.apns)
        .await;
    Mock::given(method("POST"))
        .and(path("/3/device/B"))
        .respond_with(ResponseTemplate::new(410).set_body_string(r#"{"reason":"Unregistered"}"#))
        .mount(&app.apns)
        .await;

    let response = app
        .send_push(json!({ "record": { "user_id": "u1", "title": "Hi", "message": "Test" } }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["results"][0], json!({ "token": "A", "success": true }));
    assert_eq!(response.body["results"][1]["status"], json!(410));
    postgrest.verify().await;
}

#[tokio::test]
async fn test_failed_delete_does_not_fail_invocation() {
    let postgrest = MockServer::start().await;
    mount_lookup(
        &postgrest,
        json!([{ "token": "B", "user_id": "u1", "platform": "ios" }]),
    )
    .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&postgrest)
        .await;

    let app = TestApp::new(supabase_registry(&postgrest)).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(410).set_body_string(r#"{"reason":"Unregistered"}"#))
        .mount(&app.apns)
        .await;

    let response = app.send_push(json!({ "record": { "user_id": "u1" } })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "results": [
                { "token": "B", "success": false, "status": 410, "error": "{\"reason\":\"Unregistered\"}" },
            ]
        })
    );
}

#[tokio::test]
async fn test_lookup_failure_returns_500_without_delivery() {
    let postgrest = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&postgrest)
        .await;

    let app = TestApp::new(supabase_registry(&postgrest)).await;

    let response = app.send_push(json!({ "record": { "user_id": "u1" } })).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({ "error": "Error fetching device tokens" }));
    assert!(app.apns.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_missing_supabase_configuration_returns_500() {
    let registry = Arc::new(
        SupabaseDeviceRegistry::new(&SupabaseConfig::default()).expect("Failed to build registry"),
    );
    let app = TestApp::new(registry).await;

    let response = app.send_push(json!({ "record": { "user_id": "u1" } })).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({ "error": "Missing Supabase URL or Service Role Key" })
    );
    assert!(app.apns.received_requests().await.unwrap_or_default().is_empty());
}
