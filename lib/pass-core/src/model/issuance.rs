use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::correlation_id::CorrelationId;

pub const GOOGLE_TOKEN_PATH: &str = "/api/jwtToken";
pub const APPLE_PKPASS_PATH: &str = "/api/generatePkpass";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    Google,
    Apple,
}

impl Platform {
    pub fn issuance_path(&self) -> &'static str {
        match self {
            Platform::Google => GOOGLE_TOKEN_PATH,
            Platform::Apple => APPLE_PKPASS_PATH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuanceRequest {
    pub campaign: String,
    pub wallet_address: String,
    pub card_id: String,
    pub platform: Platform,
}

/// Output of the pass request builder: everything needed to trigger issuance
/// and to subscribe for its completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedIssuance {
    pub correlation_id: CorrelationId,
    pub request: IssuanceRequest,
    pub endpoint: &'static str,
}
