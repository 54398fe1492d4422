use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_generate_pkpass_forwards_to_upstream() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .apple_pass(202, json!({ "jobId": "job-1" }))
        .await;

    // WHEN
    let resp = context
        .api
        .apple_pass
        .generate("Summer", "0xabc", "card1")
        .await;

    // THEN
    assert_eq!(resp.status(), 202);
    assert_eq!(resp.json_value().await, json!({ "jobId": "job-1" }));

    assert_eq!(
        context.server_mock.received_json(0).await,
        json!({
            "campaign": "Summer",
            "ethAddress": "0xabc",
            "cardId": "card1",
            "externalId": "card1-0xabc",
            "callbackUrl": "http://pass-server.test/api/wallet-pass-callback",
        })
    );
}

#[tokio::test]
async fn test_generate_pkpass_accepts_form_post() {
    // GIVEN
    let context = TestContext::new().await;
    context.server_mock.apple_pass(200, json!({})).await;

    // WHEN
    let resp = context
        .api
        .apple_pass
        .generate_form(&[
            ("campaign", "Summer Sale"),
            ("ethAddress", "0xabc"),
            ("cardId", "card1"),
        ])
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let forwarded = context.server_mock.received_json(0).await;
    assert_eq!(forwarded["campaign"], "Summer Sale");
    assert_eq!(forwarded["externalId"], "card1-0xabc");
}

#[tokio::test]
async fn test_generate_pkpass_passes_upstream_error_through() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .apple_pass(409, json!({ "error": "pass already issued" }))
        .await;

    // WHEN
    let resp = context
        .api
        .apple_pass
        .generate("Summer", "0xabc", "card1")
        .await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(
        resp.json_value().await,
        json!({ "error": "pass already issued" })
    );
}

#[tokio::test]
async fn test_generate_pkpass_missing_campaign() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.apple_pass.generate("", "0xabc", "card1").await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
    assert!(context.server_mock.received_requests().await.is_empty());
}
