use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health_check() {
    let context = TestContext::new().await;

    let resp = context.api.misc.health().await;

    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_build_info() {
    let context = TestContext::new().await;

    let resp = context.api.misc.build_info().await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["name"], "pass-server");
}

#[tokio::test]
async fn test_metrics_count_relay_events() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .api
        .pass_relay
        .callback(json!({ "id": "id", "result": { "fileURL": "https://files.test/x" } }))
        .await;

    // WHEN
    let resp = context.api.misc.metrics().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.text().await;
    assert!(body.contains("relay_events"));
}

#[tokio::test]
async fn test_openapi_document_lists_relay_paths() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.misc.openapi().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    for path in [
        "/api/jwtToken",
        "/api/generatePkpass",
        "/api/wallet-pass-callback",
        "/api/wallet-pass-callback/events",
        "/api/wifi-setup",
        "/api/wifi-setup-callback",
        "/api/wifi-setup-callback/events",
    ] {
        assert!(resp["paths"].get(path).is_some(), "missing {path}");
    }
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .misc
        .preflight("/api/jwtToken", "https://shop.test")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}
