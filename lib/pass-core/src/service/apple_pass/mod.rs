//! Apple Wallet pass trigger, forwarded to the external pass service.

use std::sync::Arc;

use crate::proto::upstream::UpstreamForwarder;

pub mod dto;
pub mod service;


pub(crate) const APPLE_PASS_UPSTREAM_PATH: &str = "/passes/apple";
pub(crate) const PASS_CALLBACK_PATH: &str = "/api/wallet-pass-callback";

#[derive(Clone)]
pub struct ApplePassService {
    upstream: Arc<UpstreamForwarder>,
    callback_base_url: Option<String>,
}

impl ApplePassService {
    pub(crate) fn new(upstream: Arc<UpstreamForwarder>, callback_base_url: Option<String>) -> Self {
        Self {
            upstream,
            callback_base_url,
        }
    }
}
