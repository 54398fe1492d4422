use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Completed pass held by the relay until its first read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassResult {
    pub file_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SetupStatus {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WifiSetupResult {
    pub status: SetupStatus,
    pub message: Option<String>,
}

/// Why a relay read found nothing to deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotReadyReason {
    /// nothing has arrived under this id
    Pending,
    /// already handed to an earlier reader
    Delivered,
    /// arrived but outlived the retention window
    Expired,
}
