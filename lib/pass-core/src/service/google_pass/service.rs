use super::GooglePassService;
use super::dto::{CreateSaveTokenRequestDTO, CreateSaveTokenResponseDTO};
use super::mapper::loyalty_claims;
use crate::service::error::ServiceError;
use crate::service::issuance::validator::validate_pass_subject;

impl GooglePassService {
    /// Signs a save-to-wallet JWT for one loyalty card.
    pub fn create_save_token(
        &self,
        request: CreateSaveTokenRequestDTO,
    ) -> Result<CreateSaveTokenResponseDTO, ServiceError> {
        let signer = self.signer.as_ref().ok_or(ServiceError::MissingSigningKey)?;

        validate_pass_subject(request.campaign.as_deref(), request.eth_address.as_deref())?;

        let campaign = request.campaign.unwrap_or_default();
        let eth_address = request.eth_address.unwrap_or_default();
        let card_id = request.card_id.unwrap_or_default();

        let claims = loyalty_claims(&self.config, &campaign, &eth_address, &card_id);
        let token = signer.sign(&claims)?;

        tracing::info!(%card_id, "Google Wallet token issued");
        Ok(CreateSaveTokenResponseDTO { token })
    }
}
