//! Integration tests for the webhook dispatch flow.

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, header_regex, method, path};
use wiremock::{Mock, ResponseTemplate};

use sendpush_registry::MemoryDeviceRegistry;

use crate::helpers::{BUNDLE_ID, TestApp, ios_devices, memory_registry};

async fn apns_requests(app: &TestApp) -> Vec<wiremock::Request> {
    app.apns.received_requests().await.unwrap_or_default()
}

#[tokio::test]
async fn test_missing_user_id_is_rejected() {
    let registry = memory_registry(ios_devices("u1", &["A"]));
    let app = TestApp::new(registry).await;

    for body in [
        json!({ "record": { "title": "Hi" } }),
        json!({ "record": { "user_id": "" } }),
        json!({ "title": "Hi" }),
        json!({ "record": null }),
        json!({ "record": { "user_id": 0 } }),
    ] {
        let response = app.send_push(body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, json!({ "error": "Missing record or user_id" }));
    }

    assert!(apns_requests(&app).await.is_empty());
}

#[tokio::test]
async fn test_invalid_json_is_rejected() {
    let app = TestApp::new(memory_registry(Vec::new())).await;

    let response = app.request("POST", "/send-push", "{not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({ "error": "Invalid JSON payload" }));
}

#[tokio::test]
async fn test_user_without_devices_gets_message() {
    let app = TestApp::new(memory_registry(ios_devices("someone-else", &["X"]))).await;

    let response = app
        .send_push(json!({ "record": { "user_id": "u1", "title": "Hi", "message": "Test" } }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "message": "No iOS device tokens found for this user." })
    );
    assert!(apns_requests(&app).await.is_empty());
}

#[tokio::test]
async fn test_every_device_is_attempted_once_in_order() {
    let app = TestApp::new(memory_registry(ios_devices("u1", &["t1", "t2", "t3"]))).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&app.apns)
        .await;

    let response = app
        .send_push(json!({ "record": { "user_id": "u1", "title": "Hi", "message": "Test" } }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "results": [
                { "token": "t1", "success": true },
                { "token": "t2", "success": true },
                { "token": "t3", "success": true },
            ]
        })
    );

    let paths: Vec<String> = apns_requests(&app)
        .await
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/3/device/t1", "/3/device/t2", "/3/device/t3"]);
}

#[tokio::test]
async fn test_request_carries_apns_headers_and_payload() {
    let app = TestApp::new(memory_registry(ios_devices("u1", &["abc"]))).await;
    Mock::given(method("POST"))
        .and(path("/3/device/abc"))
        .and(header_regex(
            "authorization",
            r"^bearer [A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$",
        ))
        .and(header("apns-topic", BUNDLE_ID))
        .and(header("apns-push-type", "alert"))
        .and(header("apns-expiration", "0"))
        .and(header("apns-priority", "10"))
        .and(body_json(json!({
            "aps": {
                "alert": { "title": "Nueva Notificación", "body": "" },
                "sound": "default",
                "badge": 1,
            },
            "screen": "/rounds/42",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.apns)
        .await;

    let response = app
        .send_push(json!({ "record": { "user_id": "u1", "link": "/rounds/42" } }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "results": [{ "token": "abc", "success": true }] }));
}

#[tokio::test]
async fn test_one_provider_token_per_invocation() {
    let app = TestApp::new(memory_registry(ios_devices("u1", &["a", "b"]))).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.apns)
        .await;

    app.send_push(json!({ "record": { "user_id": "u1" } })).await;

    let auth: Vec<String> = apns_requests(&app)
        .await
        .iter()
        .filter_map(|r| r.headers.get("authorization"))
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect();
    assert_eq!(auth.len(), 2);
    assert_eq!(auth[0], auth[1]);
}

#[tokio::test]
async fn test_gone_token_is_removed_and_delivered_token_kept() {
    let registry = memory_registry(ios_devices("u1", &["A", "B"]));
    let app = TestApp::new(registry.clone()).await;
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
    assert_eq!(
        response.body,
        json!({
            "results": [
                { "token": "A", "success": true },
                { "token": "B", "success": false, "status": 410, "error": "{\"reason\":\"Unregistered\"}" },
            ]
        })
    );
    assert!(registry.contains("A").await);
    assert!(!registry.contains("B").await);
}

#[tokio::test]
async fn test_transient_rejection_keeps_token() {
    let registry = memory_registry(ios_devices("u1", &["A"]));
    let app = TestApp::new(registry.clone()).await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"reason":"TooManyRequests"}"#),
        )
        .mount(&app.apns)
        .await;

    let response = app.send_push(json!({ "record": { "user_id": "u1" } })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["results"][0]["success"], json!(false));
    assert_eq!(response.body["results"][0]["status"], json!(429));
    assert!(registry.contains("A").await);
}

#[tokio::test]
async fn test_unregistered_reason_removes_token_on_any_status() {
    let registry = memory_registry(ios_devices("u1", &["A", "B"]));
    let app = TestApp::new(registry.clone()).await;
    Mock::given(method("POST"))
        .and(path("/3/device/A"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"reason":"Unregistered"}"#))
        .mount(&app.apns)
        .await;
    Mock::given(method("POST"))
        .and(path("/3/device/B"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"reason":"BadDeviceToken"}"#))
        .mount(&app.apns)
        .await;

    let response = app.send_push(json!({ "record": { "user_id": "u1" } })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!registry.contains("A").await);
    assert!(registry.contains("B").await);
}

#[tokio::test]
async fn test_missing_signing_key_aborts_before_delivery() {
    let registry = memory_registry(ios_devices("u1", &["A"]));
    let app = TestApp::with_auth_key(registry.clone(), "").await;

    let response = app.send_push(json!({ "record": { "user_id": "u1" } })).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({ "error": "APNs Configuration Error: Missing APNs configuration secrets." })
    );
    assert!(apns_requests(&app).await.is_empty());
    assert!(registry.contains("A").await);
}

#[tokio::test]
async fn test_malformed_signing_key_aborts_before_delivery() {
    let app = TestApp::with_auth_key(memory_registry(ios_devices("u1", &["A"])), "%%%").await;

    let response = app.send_push(json!({ "record": { "user_id": "u1" } })).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = response.body["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("APNs Configuration Error: "), "{message}");
    assert!(apns_requests(&app).await.is_empty());
}

#[tokio::test]
async fn test_signing_key_is_only_checked_when_devices_exist() {
    let app = TestApp::with_auth_key(memory_registry(Vec::new()), "").await;

    let response = app.send_push(json!({ "record": { "user_id": "u1" } })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "message": "No iOS device tokens found for this user." })
    );
}

#[tokio::test]
async fn test_hosted_function_path_is_served() {
    let app = TestApp::new(std::sync::Arc::new(MemoryDeviceRegistry::new())).await;

    let response = app
        .request(
            "POST",
            "/functions/v1/send-push",
            json!({ "record": { "user_id": "u1" } }).to_string(),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new(memory_registry(Vec::new())).await;

    let response = app.request("GET", "/health", "").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], json!("ok"));
}
