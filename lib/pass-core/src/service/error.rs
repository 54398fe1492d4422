use std::time::Duration;

use thiserror::Error;

use crate::model::completion::NotReadyReason;
use crate::model::correlation_id::CorrelationId;
use crate::provider::completion_stream::CompletionStreamError;
use crate::provider::http_client;
use crate::provider::pass_signer::PassSignerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error(transparent)]
    Completion(#[from] CompletionError),
    #[error(transparent)]
    NotFound(#[from] ResultNotFoundError),

    #[error("HTTP client error: `{0}`")]
    HttpClient(#[from] http_client::Error),
    #[error("Completion stream error: `{0}`")]
    CompletionStream(#[from] CompletionStreamError),
    #[error("Pass signing error: `{0}`")]
    Signer(#[from] PassSignerError),

    #[error("No private key set")]
    MissingSigningKey,
    #[error("Wallet pass service URL not configured")]
    MissingUpstream,
    #[error("WiFi setup failed")]
    WifiSetupFailed(#[source] UpstreamError),
    #[error("Mapping error: `{0}`")]
    MappingError(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing campaign or ethAddress")]
    MissingCampaignOrWalletAddress,
    #[error("Missing id, result, or fileURL")]
    MissingCallbackFields,
    #[error("Missing id or status")]
    MissingWifiCallbackFields,
    #[error("Missing id in query")]
    MissingId,
    #[error("Missing required fields: username, password, ssid, wifiPassword, or setupId")]
    MissingWifiSetupFields,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Invalid upstream response: `{0}`")]
    InvalidBody(String),
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Timed out after {0:?} waiting for completion")]
    Timeout(Duration),
    #[error("Completion stream failed: {0}")]
    Stream(String),
    #[error("{0}")]
    Failed(String),
}

/// A relay read that found nothing to deliver.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ResultNotFoundError {
    pub id: CorrelationId,
    pub reason: NotReadyReason,
    pub message: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,

    BR_0010,

    BR_0020,
    BR_0021,
    BR_0022,
    BR_0023,
    BR_0024,

    BR_0030,
    BR_0031,
    BR_0032,

    BR_0040,
    BR_0041,

    BR_0050,
    BR_0051,
    BR_0052,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unmapped error",
            ErrorCode::BR_0001 => "Missing campaign or wallet address",
            ErrorCode::BR_0003 => "Incomplete pass completion event",
            ErrorCode::BR_0004 => "Incomplete WiFi setup completion event",
            ErrorCode::BR_0005 => "Missing correlation id",
            ErrorCode::BR_0006 => "Incomplete WiFi setup request",
            ErrorCode::BR_0010 => "Result not available",
            ErrorCode::BR_0020 => "Upstream rejected request",
            ErrorCode::BR_0021 => "Upstream unreachable",
            ErrorCode::BR_0022 => "Invalid upstream response",
            ErrorCode::BR_0023 => "Upstream not configured",
            ErrorCode::BR_0024 => "WiFi setup failed",
            ErrorCode::BR_0030 => "Completion timeout",
            ErrorCode::BR_0031 => "Completion stream error",
            ErrorCode::BR_0032 => "Completion reported failure",
            ErrorCode::BR_0040 => "Pass signing error",
            ErrorCode::BR_0041 => "Missing signing key",
            ErrorCode::BR_0050 => "HTTP client error",
            ErrorCode::BR_0051 => "Completion stream subscription error",
            ErrorCode::BR_0052 => "Mapping error",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Upstream(error) => error.error_code(),
            ServiceError::Completion(error) => error.error_code(),
            ServiceError::NotFound(_) => ErrorCode::BR_0010,
            ServiceError::HttpClient(_) => ErrorCode::BR_0050,
            ServiceError::CompletionStream(_) => ErrorCode::BR_0051,
            ServiceError::Signer(_) => ErrorCode::BR_0040,
            ServiceError::MissingSigningKey => ErrorCode::BR_0041,
            ServiceError::MissingUpstream => ErrorCode::BR_0023,
            ServiceError::WifiSetupFailed(_) => ErrorCode::BR_0024,
            ServiceError::MappingError(_) => ErrorCode::BR_0052,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingCampaignOrWalletAddress => ErrorCode::BR_0001,
            ValidationError::MissingCallbackFields => ErrorCode::BR_0003,
            ValidationError::MissingWifiCallbackFields => ErrorCode::BR_0004,
            ValidationError::MissingId => ErrorCode::BR_0005,
            ValidationError::MissingWifiSetupFields => ErrorCode::BR_0006,
        }
    }
}

impl UpstreamError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            UpstreamError::Rejected { .. } => ErrorCode::BR_0020,
            UpstreamError::Transport(_) => ErrorCode::BR_0021,
            UpstreamError::InvalidBody(_) => ErrorCode::BR_0022,
        }
    }
}

impl CompletionError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            CompletionError::Timeout(_) => ErrorCode::BR_0030,
            CompletionError::Stream(_) => ErrorCode::BR_0031,
            CompletionError::Failed(_) => ErrorCode::BR_0032,
        }
    }
}
