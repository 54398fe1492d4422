use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Relay retention must be greater than zero")]
    ZeroRetention,
    #[error("Relay stream timeout must be greater than zero")]
    ZeroStreamTimeout,
    #[error("Invalid URL in `{field}`: `{value}`")]
    InvalidUrl { field: &'static str, value: String },
    #[error("Invalid Google Wallet private key: `{0}`")]
    InvalidPrivateKey(String),
    #[error("HTTP client setup failed: `{0}`")]
    HttpClient(String),
}
