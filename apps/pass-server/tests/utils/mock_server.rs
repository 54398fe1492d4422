use serde_json::Value;
use wiremock::http::Method;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, Request, ResponseTemplate};

use crate::fixtures::UPSTREAM_TOKEN;

/// Stand-in for the external wallet pass service.
pub struct MockServer {
    mock: wiremock::MockServer,
}

impl MockServer {
    pub async fn new() -> Self {
        let mock = wiremock::MockServer::start().await;
        Self { mock }
    }

    pub fn uri(&self) -> String {
        self.mock.uri()
    }

    pub async fn apple_pass(&self, status: u16, body: Value) {
        Mock::given(method(Method::POST))
            .and(path("/passes/apple"))
            .and(header("Authorization", format!("Bearer {UPSTREAM_TOKEN}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn wifi_setup(&self, status: u16, body: Value) {
        Mock::given(method(Method::POST))
            .and(path("/merchant-logins/wifi-setup"))
            .and(header("Authorization", format!("Bearer {UPSTREAM_TOKEN}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn received_requests(&self) -> Vec<Request> {
        self.mock.received_requests().await.unwrap_or_default()
    }

    pub async fn received_json(&self, index: usize) -> Value {
        let requests = self.received_requests().await;
        serde_json::from_slice(&requests[index].body).unwrap()
    }
}
