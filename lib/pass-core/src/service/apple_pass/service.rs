use super::dto::{ApplePassJobDTO, CreateApplePassRequestDTO};
use super::{APPLE_PASS_UPSTREAM_PATH, ApplePassService, PASS_CALLBACK_PATH};
use crate::model::correlation_id::CorrelationId;
use crate::proto::upstream::UpstreamResponse;
use crate::service::error::ServiceError;
use crate::service::issuance::validator::validate_pass_subject;

impl ApplePassService {
    /// Starts pass generation upstream. The upstream status and body are
    /// returned untouched; the pass arrives later on the pass callback.
    pub async fn create_pass(
        &self,
        request: CreateApplePassRequestDTO,
    ) -> Result<UpstreamResponse, ServiceError> {
        validate_pass_subject(request.campaign.as_deref(), request.eth_address.as_deref())?;

        let campaign = request.campaign.unwrap_or_default();
        let eth_address = request.eth_address.unwrap_or_default();
        let card_id = request.card_id.unwrap_or_default();
        let external_id = CorrelationId::for_pass(&card_id, &eth_address);

        let job = ApplePassJobDTO {
            campaign,
            eth_address,
            card_id,
            external_id: external_id.to_string(),
            callback_url: self.callback_base_url.as_deref().map(|base| {
                format!("{}{PASS_CALLBACK_PATH}", base.trim_end_matches('/'))
            }),
        };

        let response = self.upstream.forward(APPLE_PASS_UPSTREAM_PATH, &job).await?;
        tracing::info!(%external_id, status = response.status, "Apple pass requested");

        Ok(response)
    }
}
