//! Google Wallet "save to wallet" token issuance.

use std::sync::Arc;

use crate::config::core_config::GooglePassConfig;
use crate::provider::pass_signer::PassTokenSigner;

pub mod dto;
mod mapper;
pub mod service;


#[derive(Clone)]
pub struct GooglePassService {
    signer: Option<Arc<dyn PassTokenSigner>>,
    config: GooglePassConfig,
}

impl GooglePassService {
    pub(crate) fn new(signer: Option<Arc<dyn PassTokenSigner>>, config: GooglePassConfig) -> Self {
        Self { signer, config }
    }
}
