use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

fn completion(id: &str, file_url: &str) -> serde_json::Value {
    json!({
        "id": id,
        "result": { "fileURL": file_url },
        "signedMessage": "0xsigned",
    })
}

#[tokio::test]
async fn test_callback_then_read_delivers_once() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .pass_relay
        .callback(completion("card1-0xabc", "https://files.test/card1.pkpass"))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await, json!({ "success": true }));

    let resp = context.api.pass_relay.read("card1-0xabc").await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json_value().await,
        json!({ "fileURL": "https://files.test/card1.pkpass" })
    );

    let resp = context.api.pass_relay.read("card1-0xabc").await;
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Pass not ready yet");
    assert_eq!(resp["code"], "BR_0010");
    assert_eq!(resp["status"], "DELIVERED");
}

#[tokio::test]
async fn test_read_unknown_id() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.pass_relay.read("nobody").await;

    // THEN
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Pass not ready yet");
    assert_eq!(resp["status"], "PENDING");
}

#[tokio::test]
async fn test_read_without_id() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.pass_relay.read_without_id().await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Missing id in query");
    assert_eq!(resp["code"], "BR_0005");
}

#[tokio::test]
async fn test_incomplete_callback_rejected() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .pass_relay
        .callback(json!({ "id": "card1-0xabc", "result": {} }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.json_value().await["error"],
        "Missing id, result, or fileURL"
    );

    let resp = context.api.pass_relay.read("card1-0xabc").await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_malformed_callback_body() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .pass_relay
        .callback(json!({ "id": 42 }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0084");
    assert_eq!(resp["error"], "General input validation error");
}

#[tokio::test]
async fn test_later_callback_replaces_earlier() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .api
        .pass_relay
        .callback(completion("id", "https://files.test/first"))
        .await;
    context
        .api
        .pass_relay
        .callback(completion("id", "https://files.test/second"))
        .await;

    // WHEN
    let resp = context.api.pass_relay.read("id").await;

    // THEN
    assert_eq!(
        resp.json_value().await["fileURL"],
        "https://files.test/second"
    );
}
