use std::time::Duration;

use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_events_deliver_result_arriving_later() {
    // GIVEN
    let context = TestContext::new().await;
    let resp = context.api.pass_relay.events("card1-0xabc").await;
    assert_eq!(resp.status(), 200);
    assert!(
        resp.header("content-type")
            .unwrap()
            .starts_with("text/event-stream")
    );

    // WHEN
    tokio::time::sleep(Duration::from_millis(100)).await;
    context
        .api
        .pass_relay
        .callback(json!({
            "id": "card1-0xabc",
            "result": { "fileURL": "https://files.test/card1.pkpass" },
        }))
        .await;

    // THEN
    let body = resp.text().await;
    assert!(body.contains(r#"data: {"fileURL":"https://files.test/card1.pkpass"}"#));

    let resp = context.api.pass_relay.read("card1-0xabc").await;
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["status"], "DELIVERED");
}

#[tokio::test]
async fn test_events_deliver_result_already_present() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .api
        .pass_relay
        .callback(json!({
            "id": "card1-0xabc",
            "result": { "fileURL": "https://files.test/card1.pkpass" },
        }))
        .await;

    // WHEN
    let resp = context.api.pass_relay.events("card1-0xabc").await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.contains("https://files.test/card1.pkpass"));
}

#[tokio::test]
async fn test_events_end_without_result_after_timeout() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.pass_relay.events("nobody").await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = tokio::time::timeout(Duration::from_secs(10), resp.text())
        .await
        .unwrap();
    assert!(!body.contains("data:"));
}

#[tokio::test]
async fn test_events_without_id() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.pass_relay.events_without_id().await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0005");
}
