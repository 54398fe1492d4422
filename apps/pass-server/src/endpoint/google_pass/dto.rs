use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSaveTokenRequestRestDTO {
    /// Campaign name, becomes part of the loyalty object id.
    pub campaign: Option<String>,
    /// Wallet address of the card holder.
    pub eth_address: Option<String>,
    /// Loyalty card id, selects the pass class.
    pub card_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct CreateSaveTokenResponseRestDTO {
    /// RS256 signed "save to wallet" JWT.
    pub token: String,
}
