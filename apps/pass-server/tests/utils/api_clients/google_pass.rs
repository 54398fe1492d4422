use serde_json::json;

use super::{HttpClient, Response};

pub struct GooglePassApi {
    client: HttpClient,
}

impl GooglePassApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create_token(
        &self,
        campaign: Option<&str>,
        eth_address: Option<&str>,
        card_id: &str,
    ) -> Response {
        let body = json!({
            "campaign": campaign,
            "ethAddress": eth_address,
            "cardId": card_id,
        });

        self.client.post("/api/jwtToken", body).await
    }
}
