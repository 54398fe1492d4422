use super::{HttpClient, Response};

pub struct MiscApi {
    client: HttpClient,
}

impl MiscApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn health(&self) -> Response {
        self.client.get("/health").await
    }

    pub async fn build_info(&self) -> Response {
        self.client.get("/build-info").await
    }

    pub async fn metrics(&self) -> Response {
        self.client.get("/metrics").await
    }

    pub async fn openapi(&self) -> Response {
        self.client.get("/api-docs/openapi.json").await
    }

    pub async fn preflight(&self, path: &str, origin: &str) -> Response {
        self.client.options(path, origin, "POST").await
    }
}
