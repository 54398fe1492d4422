#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use config::ConfigValidationError;
use config::core_config::CoreConfig;
use proto::clock::{Clock, DefaultClock};
use proto::upstream::UpstreamForwarder;
use provider::http_client::HttpClient;
use provider::http_client::reqwest_client::ReqwestClient;
use provider::pass_signer::PassTokenSigner;
use provider::pass_signer::rs256::Rs256TokenSigner;
use service::apple_pass::ApplePassService;
use service::google_pass::GooglePassService;
use service::relay::{PassResultRelay, RelayService, WifiSetupRelay};
use service::wifi_setup::WifiSetupService;

pub mod config;
pub mod model;
pub mod proto;
pub mod provider;
pub mod service;
pub mod util;

/// Server-side services, constructed once per process.
///
/// Both relays own their result table; every clone of a relay shares it.
pub struct PassCore {
    pub google_pass_service: GooglePassService,
    pub apple_pass_service: ApplePassService,
    pub wifi_setup_service: WifiSetupService,
    pub pass_relay: PassResultRelay,
    pub wifi_setup_relay: WifiSetupRelay,
    pub config: Arc<CoreConfig>,
}

impl PassCore {
    pub fn new(
        config: CoreConfig,
        http_client: Option<Arc<dyn HttpClient>>,
        clock: Option<Arc<dyn Clock>>,
    ) -> Result<Self, ConfigValidationError> {
        config.validate()?;

        let http_client = match http_client {
            Some(client) => client,
            None => Arc::new(
                ReqwestClient::with_timeout(config.upstream.request_timeout)
                    .map_err(|error| ConfigValidationError::HttpClient(error.to_string()))?,
            ),
        };
        let clock = clock.unwrap_or_else(|| Arc::new(DefaultClock));

        let signer: Option<Arc<dyn PassTokenSigner>> = match &config.google_pass.private_key {
            Some(private_key) => Some(Arc::new(
                Rs256TokenSigner::from_pem(private_key)
                    .map_err(|error| ConfigValidationError::InvalidPrivateKey(error.to_string()))?,
            )),
            None => None,
        };

        let upstream = Arc::new(UpstreamForwarder::new(
            http_client,
            config.upstream.wallet_pass_url.clone(),
            config.upstream.bearer_token.clone(),
        ));

        let pass_relay = RelayService::new(
            clock.clone(),
            config.relay.retention,
            config.relay.stream_timeout,
        );
        let wifi_setup_relay =
            RelayService::new(clock, config.relay.retention, config.relay.stream_timeout);

        Ok(Self {
            google_pass_service: GooglePassService::new(signer, config.google_pass.clone()),
            apple_pass_service: ApplePassService::new(
                upstream.clone(),
                config.relay.callback_base_url.clone(),
            ),
            wifi_setup_service: WifiSetupService::new(upstream),
            pass_relay,
            wifi_setup_relay,
            config: Arc::new(config),
        })
    }
}
