use std::time::Duration;

use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_callback_then_read() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .wifi_setup_relay
        .callback(json!({
            "id": "XX-wifi-setup-abc123def",
            "status": "error",
            "message": "wrong password",
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);

    let resp = context.api.wifi_setup_relay.read("XX-wifi-setup-abc123def").await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json_value().await,
        json!({ "status": "error", "message": "wrong password" })
    );

    let resp = context.api.wifi_setup_relay.read("XX-wifi-setup-abc123def").await;
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "WiFi setup result not ready yet");
    assert_eq!(resp["status"], "DELIVERED");
}

#[tokio::test]
async fn test_callback_without_status() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .wifi_setup_relay
        .callback(json!({ "id": "XX-wifi-setup-abc123def" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Missing id or status");
    assert_eq!(resp["code"], "BR_0004");
}

#[tokio::test]
async fn test_relays_are_separate() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .api
        .wifi_setup_relay
        .callback(json!({ "id": "shared-id", "status": "success" }))
        .await;

    // WHEN
    let resp = context.api.pass_relay.read("shared-id").await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(context.api.wifi_setup_relay.read("shared-id").await.status(), 200);
}

#[tokio::test]
async fn test_events_deliver_setup_outcome() {
    // GIVEN
    let context = TestContext::new().await;
    let resp = context
        .api
        .wifi_setup_relay
        .events("XX-wifi-setup-abc123def")
        .await;
    assert_eq!(resp.status(), 200);

    // WHEN
    tokio::time::sleep(Duration::from_millis(100)).await;
    context
        .api
        .wifi_setup_relay
        .callback(json!({ "id": "XX-wifi-setup-abc123def", "status": "success" }))
        .await;

    // THEN
    let body = resp.text().await;
    assert!(body.contains(r#"data: {"status":"success"}"#));
}
