use std::sync::Once;

use pass_server::{ServerError, metrics};
use pass_server::router::start_server;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use super::mock_server::MockServer;
use crate::fixtures::{self, TestingConfigParams};

pub struct TestContext {
    pub api: Client,
    pub server_mock: MockServer,
    pub base_url: String,
    _handle: JoinHandle<Result<(), ServerError>>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_params(None).await
    }

    pub async fn new_with_params(params: Option<TestingConfigParams>) -> Self {
        static METRICS: Once = Once::new();
        METRICS.call_once(metrics::setup);

        let server_mock = MockServer::new().await;

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config(server_mock.uri(), params);
        let _handle = tokio::spawn(start_server(listener, config));

        Self {
            api: Client::new(base_url.clone()),
            server_mock,
            base_url,
            _handle,
        }
    }
}
