use std::path::Path;
use std::time::Duration;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use url::Url;

use super::{ConfigParsingError, ConfigValidationError};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    pub(super) app: Custom,
}

#[derive(Debug, Default, Clone)]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    pub app: Custom,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreConfig {
    pub google_pass: GooglePassConfig,
    pub upstream: UpstreamConfig,
    pub relay: RelayConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GooglePassConfig {
    pub issuer_id: String,
    pub service_email: String,
    /// PEM encoded RSA key, escaped `\n` sequences are accepted
    pub private_key: Option<SecretString>,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpstreamConfig {
    pub wallet_pass_url: Option<String>,
    pub bearer_token: Option<SecretString>,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub request_timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            wallet_pass_url: None,
            bearer_token: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelayConfig {
    /// Age after which an undelivered result is dropped
    #[serde_as(as = "DurationSeconds<u64>")]
    pub retention: Duration,
    /// How long an event stream waits for its result before ending
    #[serde_as(as = "DurationSeconds<u64>")]
    pub stream_timeout: Duration,
    /// Public base URL handed to the pass service as completion callback target
    pub callback_base_url: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            retention: Duration::from_secs(60 * 60),
            stream_timeout: Duration::from_secs(60),
            callback_base_url: None,
        }
    }
}

impl CoreConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.relay.retention.is_zero() {
            return Err(ConfigValidationError::ZeroRetention);
        }

        if self.relay.stream_timeout.is_zero() {
            return Err(ConfigValidationError::ZeroStreamTimeout);
        }

        validate_http_url("upstream.walletPassUrl", &self.upstream.wallet_pass_url)?;
        validate_http_url("relay.callbackBaseUrl", &self.relay.callback_base_url)?;

        Ok(())
    }
}

fn validate_http_url(
    field: &'static str,
    value: &Option<String>,
) -> Result<(), ConfigValidationError> {
    let Some(value) = value else {
        return Ok(());
    };

    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        _ => Err(ConfigValidationError::InvalidUrl {
            field,
            value: value.to_owned(),
        }),
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("PASS_").split("__").lowercase(false));
        }

        let core = figment
            .extract::<CoreConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
