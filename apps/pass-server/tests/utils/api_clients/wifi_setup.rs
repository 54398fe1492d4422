use serde_json::Value;

use super::{HttpClient, Response};

pub struct WifiSetupApi {
    client: HttpClient,
}

impl WifiSetupApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn setup(&self, body: Value) -> Response {
        self.client.post("/api/wifi-setup", body).await
    }
}
