use std::sync::LazyLock;

use regex::Regex;

use crate::config::core_config::GooglePassConfig;
use crate::model::google_wallet::{
    Barcode, LoyaltyObject, LoyaltyPoints, LoyaltyPointsBalance, SAVE_TO_WALLET_AUDIENCE,
    SAVE_TO_WALLET_TYPE, SaveToWalletClaims, SaveToWalletPayload,
};

static CAMPAIGN_UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid regex"));

pub(super) fn sanitize_campaign(campaign: &str) -> String {
    CAMPAIGN_UNSAFE_CHARS.replace_all(campaign, "_").into_owned()
}

pub(super) fn loyalty_claims(
    config: &GooglePassConfig,
    campaign: &str,
    eth_address: &str,
    card_id: &str,
) -> SaveToWalletClaims {
    let issuer_id = &config.issuer_id;
    let object_suffix = sanitize_campaign(campaign);

    let loyalty_object = LoyaltyObject {
        id: format!("{issuer_id}.{object_suffix}.2.{eth_address}"),
        class_id: format!("{issuer_id}.{card_id}"),
        state: "active".to_string(),
        account_id: "Appreciator".to_string(),
        account_name: eth_address.to_owned(),
        loyalty_points: LoyaltyPoints {
            balance: LoyaltyPointsBalance {
                string: "0".to_string(),
            },
            label: "Points".to_string(),
        },
        barcode: Barcode {
            r#type: "QR_CODE".to_string(),
            value: format!("{card_id}-{eth_address}"),
            alternate_text: "Scan".to_string(),
        },
    };

    SaveToWalletClaims {
        iss: config.service_email.clone(),
        aud: SAVE_TO_WALLET_AUDIENCE.to_string(),
        origins: vec![],
        typ: SAVE_TO_WALLET_TYPE.to_string(),
        payload: SaveToWalletPayload {
            loyalty_objects: vec![loyalty_object],
        },
    }
}
