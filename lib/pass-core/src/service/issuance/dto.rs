use serde::{Deserialize, Serialize};

use crate::model::issuance::IssuanceRequest;

/// Body posted to both issuance endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuanceRequestBodyDTO {
    pub campaign: String,
    pub eth_address: String,
    pub card_id: String,
}

impl From<&IssuanceRequest> for IssuanceRequestBodyDTO {
    fn from(value: &IssuanceRequest) -> Self {
        Self {
            campaign: value.campaign.clone(),
            eth_address: value.wallet_address.clone(),
            card_id: value.card_id.clone(),
        }
    }
}
