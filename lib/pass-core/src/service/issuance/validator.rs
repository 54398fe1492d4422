use crate::service::error::ValidationError;

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Campaign and wallet address must both be present and non-empty.
pub fn validate_pass_subject(
    campaign: Option<&str>,
    wallet_address: Option<&str>,
) -> Result<(), ValidationError> {
    if is_blank(campaign) || is_blank(wallet_address) {
        return Err(ValidationError::MissingCampaignOrWalletAddress);
    }

    Ok(())
}
