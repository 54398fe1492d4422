use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::Value;
use similar_asserts::assert_eq;

use crate::fixtures::{self, ISSUER_ID, SERVICE_EMAIL, TestingConfigParams};
use crate::utils::context::TestContext;

fn decode_claims(token: &str) -> Value {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&["google"]);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    jsonwebtoken::decode::<Value>(
        token,
        &DecodingKey::from_rsa_pem(fixtures::PUBLIC_KEY.as_bytes()).unwrap(),
        &validation,
    )
    .unwrap()
    .claims
}

#[tokio::test]
async fn test_create_token_success() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .google_pass
        .create_token(Some("Summer Sale"), Some("0xabc"), "card1")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let claims = decode_claims(resp["token"].as_str().unwrap());

    assert_eq!(claims["iss"], SERVICE_EMAIL);
    assert_eq!(claims["typ"], "savetowallet");
    let object = &claims["payload"]["loyaltyObjects"][0];
    assert_eq!(object["id"], format!("{ISSUER_ID}.Summer_Sale.2.0xabc"));
    assert_eq!(object["classId"], format!("{ISSUER_ID}.card1"));
    assert_eq!(object["accountName"], "0xabc");
    assert_eq!(object["barcode"]["value"], "card1-0xabc");
}

#[tokio::test]
async fn test_create_token_missing_wallet_address() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .google_pass
        .create_token(Some("Summer"), None, "card1")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "Missing campaign or ethAddress");
    assert_eq!(resp["code"], "BR_0001");
}

#[tokio::test]
async fn test_create_token_without_private_key() {
    // GIVEN
    let context = TestContext::new_with_params(Some(TestingConfigParams {
        without_private_key: true,
        ..Default::default()
    }))
    .await;

    // WHEN
    let resp = context
        .api
        .google_pass
        .create_token(Some("Summer"), Some("0xabc"), "card1")
        .await;

    // THEN
    assert_eq!(resp.status(), 500);
    let resp = resp.json_value().await;
    assert_eq!(resp["error"], "No private key set");
    assert_eq!(resp["code"], "BR_0041");
}
