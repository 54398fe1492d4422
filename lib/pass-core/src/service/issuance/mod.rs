//! Pass request builder and the issuance trigger.

use std::sync::Arc;

use crate::provider::http_client::HttpClient;

pub mod dto;
pub mod mapper;
pub mod service;
pub mod validator;


#[derive(Clone)]
pub struct IssuanceService {
    client: Arc<dyn HttpClient>,
    backend_url: String,
}

impl IssuanceService {
    pub fn new(client: Arc<dyn HttpClient>, backend_url: impl Into<String>) -> Self {
        Self {
            client,
            backend_url: backend_url.into(),
        }
    }
}
