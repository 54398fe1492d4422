use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod dto;
pub mod endpoint;
pub mod extractor;
pub mod metrics;
pub mod router;
pub mod build_info {
    pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
    pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const RUST_EDITION: &str = "2024";
}
mod middleware;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// origins allowed by CORS, any origin when empty
    pub allowed_origins: Vec<String>,
    /// whether endpoint metrics are available
    pub enable_metrics: bool,
    /// whether build-info and health endpoints are available
    pub enable_server_info: bool,
    /// whether the openapi document is served
    pub enable_open_api: bool,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid configuration: `{0}`")]
    Config(#[from] pass_core::config::ConfigValidationError),
    #[error("Invalid CORS origin `{0}`")]
    InvalidOrigin(String),
    #[error("Listener error: `{0}`")]
    Listener(#[from] std::io::Error),
}
