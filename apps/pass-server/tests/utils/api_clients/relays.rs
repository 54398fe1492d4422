use serde_json::Value;

use super::{HttpClient, Response};

/// Callback, read and event stream endpoints of one result relay.
pub struct RelayApi {
    client: HttpClient,
    path: &'static str,
}

impl RelayApi {
    pub fn new(client: HttpClient, path: &'static str) -> Self {
        Self { client, path }
    }

    pub async fn callback(&self, body: Value) -> Response {
        self.client.post(self.path, body).await
    }

    pub async fn read(&self, id: &str) -> Response {
        self.client.get(&format!("{}?id={id}", self.path)).await
    }

    pub async fn read_without_id(&self) -> Response {
        self.client.get(self.path).await
    }

    pub async fn events(&self, id: &str) -> Response {
        self.client.get(&format!("{}/events?id={id}", self.path)).await
    }

    pub async fn events_without_id(&self) -> Response {
        self.client.get(&format!("{}/events", self.path)).await
    }
}
