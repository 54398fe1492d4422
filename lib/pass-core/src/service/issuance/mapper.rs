use crate::model::correlation_id::CorrelationId;
use crate::model::issuance::{IssuanceRequest, Platform, PreparedIssuance};

/// Derives the correlation id and picks the issuer endpoint. Inputs are taken
/// as they are; callers validate first.
pub fn build_issuance(
    campaign: &str,
    wallet_address: &str,
    card_id: &str,
    platform: Platform,
) -> PreparedIssuance {
    PreparedIssuance {
        correlation_id: CorrelationId::for_pass(card_id, wallet_address),
        request: IssuanceRequest {
            campaign: campaign.to_owned(),
            wallet_address: wallet_address.to_owned(),
            card_id: card_id.to_owned(),
            platform,
        },
        endpoint: platform.issuance_path(),
    }
}
