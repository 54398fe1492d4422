//! Merchant WiFi provisioning, forwarded to the external pass service.

use std::sync::Arc;

use crate::proto::upstream::UpstreamForwarder;

pub mod dto;
pub mod service;
mod validator;


pub(crate) const WIFI_SETUP_UPSTREAM_PATH: &str = "/merchant-logins/wifi-setup";

#[derive(Clone)]
pub struct WifiSetupService {
    upstream: Arc<UpstreamForwarder>,
}

impl WifiSetupService {
    pub(crate) fn new(upstream: Arc<UpstreamForwarder>) -> Self {
        Self { upstream }
    }
}
