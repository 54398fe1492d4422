use serde::{Deserialize, Serialize};

use crate::model::completion::SetupStatus;
use crate::model::correlation_id::CorrelationId;
use crate::model::issuance::Platform;

#[derive(Clone, Debug)]
pub struct ClaimPassRequestDTO {
    pub campaign: Option<String>,
    pub wallet_address: Option<String>,
    pub card_id: String,
    pub platform: Platform,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimedPassDTO {
    pub correlation_id: CorrelationId,
    pub file_url: String,
}

#[derive(Clone, Debug)]
pub struct WifiSetupClaimRequestDTO {
    pub username: String,
    pub password: String,
    pub ssid: String,
    pub wifi_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WifiSetupOutcomeDTO {
    pub setup_id: CorrelationId,
    pub status: SetupStatus,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WifiSetupBodyDTO {
    pub username: String,
    pub password: String,
    pub ssid: String,
    pub wifi_password: String,
    pub setup_id: String,
    pub base_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct PassPollResponseDTO {
    #[serde(rename = "fileURL")]
    pub file_url: String,
}
