use serde_json::json;
use similar_asserts::assert_eq;

use crate::fixtures::TestingConfigParams;
use crate::utils::context::TestContext;

fn setup_request() -> serde_json::Value {
    json!({
        "username": "merchant",
        "password": "secret",
        "ssid": "cafe",
        "wifiPassword": "hunter2",
        "setupId": "XX-wifi-setup-abc123def",
        "baseUrl": "https://shop.test",
    })
}

#[tokio::test]
async fn test_wifi_setup_forwarded() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .wifi_setup(200, json!({ "queued": true }))
        .await;

    // WHEN
    let resp = context.api.wifi_setup.setup(setup_request()).await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await, json!({ "queued": true }));
    assert_eq!(context.server_mock.received_json(0).await, setup_request());
}

#[tokio::test]
async fn test_wifi_setup_upstream_status_passed_through() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .wifi_setup(401, json!({ "message": "invalid merchant login" }))
        .await;

    // WHEN
    let resp = context.api.wifi_setup.setup(setup_request()).await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert_eq!(
        resp.json_value().await,
        json!({ "message": "invalid merchant login" })
    );
}

#[tokio::test]
async fn test_wifi_setup_missing_fields() {
    // GIVEN
    let context = TestContext::new().await;
    let mut request = setup_request();
    request["wifiPassword"] = json!("");

    // WHEN
    let resp = context.api.wifi_setup.setup(request).await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(
        resp["error"],
        "Missing required fields: username, password, ssid, wifiPassword, or setupId"
    );
    assert_eq!(resp["code"], "BR_0006");
    assert!(context.server_mock.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_wifi_setup_upstream_unreachable() {
    // GIVEN
    let context = TestContext::new_with_params(Some(TestingConfigParams {
        additional_config: Some(
            indoc::indoc! {"
                upstream:
                    walletPassUrl: \"http://127.0.0.1:1\"
            "}
            .to_string(),
        ),
        ..Default::default()
    }))
    .await;

    // WHEN
    let resp = context.api.wifi_setup.setup(setup_request()).await;

    // THEN
    assert_eq!(resp.status(), 500);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "WiFi setup failed");
    assert_eq!(resp["code"], "BR_0024");
    assert!(resp["cause"]["message"].is_string());
}

#[tokio::test]
async fn test_wifi_setup_hidden_cause() {
    // GIVEN
    let context = TestContext::new_with_params(Some(TestingConfigParams {
        hide_error_response_cause: true,
        additional_config: Some(
            indoc::indoc! {"
                upstream:
                    walletPassUrl: \"http://127.0.0.1:1\"
            "}
            .to_string(),
        ),
        ..Default::default()
    }))
    .await;

    // WHEN
    let resp = context.api.wifi_setup.setup(setup_request()).await;

    // THEN
    assert_eq!(resp.status(), 500);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "WiFi setup failed");
    assert!(resp.get("cause").is_none());
}
