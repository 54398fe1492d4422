//! Client side of the protocol: validate, build, subscribe, trigger, await.

use std::sync::Arc;
use std::time::Duration;

use crate::provider::completion_stream::CompletionStreamProvider;
use crate::provider::http_client::HttpClient;
use crate::service::completion::{PASS_ISSUANCE_TIMEOUT, WIFI_SETUP_TIMEOUT};
use crate::service::issuance::IssuanceService;

pub mod dto;
mod mapper;
pub mod service;


#[derive(Clone, Debug)]
pub struct ClaimConfig {
    /// Pass server that hosts the issuance endpoints and relays
    pub backend_url: String,
    pub pass_timeout: Duration,
    pub wifi_setup_timeout: Duration,
}

impl ClaimConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            pass_timeout: PASS_ISSUANCE_TIMEOUT,
            wifi_setup_timeout: WIFI_SETUP_TIMEOUT,
        }
    }
}

#[derive(Clone)]
pub struct ClaimService {
    issuance: IssuanceService,
    streams: Arc<dyn CompletionStreamProvider>,
    client: Arc<dyn HttpClient>,
    config: ClaimConfig,
}

impl ClaimService {
    pub fn new(
        client: Arc<dyn HttpClient>,
        streams: Arc<dyn CompletionStreamProvider>,
        config: ClaimConfig,
    ) -> Self {
        Self {
            issuance: IssuanceService::new(client.clone(), config.backend_url.clone()),
            streams,
            client,
            config,
        }
    }
}
