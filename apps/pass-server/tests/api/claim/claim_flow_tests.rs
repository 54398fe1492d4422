use std::sync::Arc;
use std::time::Duration;

use pass_core::model::completion::SetupStatus;
use pass_core::model::issuance::Platform;
use pass_core::provider::completion_stream::sse::SseStreamProvider;
use pass_core::provider::http_client::reqwest_client::ReqwestClient;
use pass_core::service::claim::dto::{ClaimPassRequestDTO, WifiSetupClaimRequestDTO};
use pass_core::service::claim::{ClaimConfig, ClaimService};
use pass_core::service::error::{CompletionError, ServiceError};
use serde_json::json;
use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

fn claim_service(context: &TestContext, timeout: Duration) -> ClaimService {
    let mut config = ClaimConfig::new(context.base_url.clone());
    config.pass_timeout = timeout;
    config.wifi_setup_timeout = timeout;

    ClaimService::new(
        Arc::new(ReqwestClient::default()),
        Arc::new(SseStreamProvider::new(
            reqwest::Client::new(),
            context.base_url.clone(),
        )),
        config,
    )
}

async fn wait_for_upstream_request(context: &TestContext) {
    for _ in 0..100 {
        if !context.server_mock.received_requests().await.is_empty() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("upstream never called");
}

#[tokio::test]
async fn test_claim_apple_pass_end_to_end() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .apple_pass(200, json!({ "jobId": "job-1" }))
        .await;
    let service = claim_service(&context, Duration::from_secs(10));

    // WHEN
    let claim = tokio::spawn(async move {
        service
            .claim_pass(ClaimPassRequestDTO {
                campaign: Some("Summer".to_string()),
                wallet_address: Some("0xabc".to_string()),
                card_id: "card1".to_string(),
                platform: Platform::Apple,
            })
            .await
    });

    wait_for_upstream_request(&context).await;
    let external_id = context.server_mock.received_json(0).await["externalId"].clone();
    assert_eq!(external_id, "card1-0xabc");

    context
        .api
        .pass_relay
        .callback(json!({
            "id": external_id,
            "result": { "fileURL": "https://files.test/card1.pkpass" },
        }))
        .await;

    // THEN
    let claimed = claim.await.unwrap().unwrap();
    assert_eq!(claimed.correlation_id.as_str(), "card1-0xabc");
    assert_eq!(claimed.file_url, "https://files.test/card1.pkpass");
}

#[tokio::test]
async fn test_claim_times_out_without_completion() {
    // GIVEN
    let context = TestContext::new().await;
    context.server_mock.apple_pass(200, json!({})).await;
    let service = claim_service(&context, Duration::from_millis(300));

    // WHEN
    let result = service
        .claim_pass(ClaimPassRequestDTO {
            campaign: Some("Summer".to_string()),
            wallet_address: Some("0xabc".to_string()),
            card_id: "card1".to_string(),
            platform: Platform::Apple,
        })
        .await;

    // THEN
    assert!(matches!(
        result,
        Err(ServiceError::Completion(CompletionError::Timeout(_)))
    ));
}

#[tokio::test]
async fn test_claim_rejected_trigger_surfaces_upstream_message() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .apple_pass(409, json!({ "error": "pass already issued" }))
        .await;
    let service = claim_service(&context, Duration::from_secs(10));

    // WHEN
    let result = service
        .claim_pass(ClaimPassRequestDTO {
            campaign: Some("Summer".to_string()),
            wallet_address: Some("0xabc".to_string()),
            card_id: "card1".to_string(),
            platform: Platform::Apple,
        })
        .await;

    // THEN
    let Err(error) = result else {
        panic!("expected rejection");
    };
    assert_eq!(error.to_string(), "pass already issued");
}

#[tokio::test]
async fn test_setup_wifi_end_to_end() {
    // GIVEN
    let context = TestContext::new().await;
    context.server_mock.wifi_setup(200, json!({})).await;
    let service = claim_service(&context, Duration::from_secs(10));

    // WHEN
    let setup = tokio::spawn(async move {
        service
            .setup_wifi(WifiSetupClaimRequestDTO {
                username: "merchant".to_string(),
                password: "secret".to_string(),
                ssid: "cafe".to_string(),
                wifi_password: "hunter2".to_string(),
            })
            .await
    });

    wait_for_upstream_request(&context).await;
    let forwarded = context.server_mock.received_json(0).await;
    assert_eq!(forwarded["ssid"], "cafe");
    assert_eq!(forwarded["baseUrl"], context.base_url.as_str());

    context
        .api
        .wifi_setup_relay
        .callback(json!({ "id": forwarded["setupId"], "status": "success" }))
        .await;

    // THEN
    let outcome = setup.await.unwrap().unwrap();
    assert_eq!(outcome.status, SetupStatus::Success);
    assert_eq!(json!(outcome.setup_id.as_str()), forwarded["setupId"]);
}
