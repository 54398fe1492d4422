//! Google Wallet "save to wallet" JWT claims for a loyalty object.

use serde::{Deserialize, Serialize};

pub const SAVE_TO_WALLET_AUDIENCE: &str = "google";
pub const SAVE_TO_WALLET_TYPE: &str = "savetowallet";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveToWalletClaims {
    pub iss: String,
    pub aud: String,
    pub origins: Vec<String>,
    pub typ: String,
    pub payload: SaveToWalletPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveToWalletPayload {
    pub loyalty_objects: Vec<LoyaltyObject>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyObject {
    pub id: String,
    pub class_id: String,
    pub state: String,
    pub account_id: String,
    pub account_name: String,
    pub loyalty_points: LoyaltyPoints,
    pub barcode: Barcode,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyPoints {
    pub balance: LoyaltyPointsBalance,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyPointsBalance {
    pub string: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barcode {
    pub r#type: String,
    pub value: String,
    pub alternate_text: String,
}
