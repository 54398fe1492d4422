use super::ClaimService;
use super::dto::{
    ClaimPassRequestDTO, ClaimedPassDTO, PassPollResponseDTO, WifiSetupClaimRequestDTO,
    WifiSetupOutcomeDTO,
};
use super::mapper::wifi_setup_body;
use crate::model::correlation_id::CorrelationId;
use crate::provider::completion_stream::CompletionChannel;
use crate::service::completion::CompletionWaiter;
use crate::service::completion::mapper::{decode_pass_message, decode_wifi_setup_message};
use crate::service::error::{ServiceError, UpstreamError};
use crate::service::issuance::dto::IssuanceRequestBodyDTO;
use crate::service::issuance::mapper::build_issuance;
use crate::service::issuance::validator::validate_pass_subject;
use crate::util::backend_url::backend_endpoint;

const WIFI_SETUP_PATH: &str = "/api/wifi-setup";
const PASS_RESULT_PATH: &str = "/api/wallet-pass-callback";

impl ClaimService {
    /// Requests a pass and waits for its download URL.
    pub async fn claim_pass(
        &self,
        request: ClaimPassRequestDTO,
    ) -> Result<ClaimedPassDTO, ServiceError> {
        validate_pass_subject(
            request.campaign.as_deref(),
            request.wallet_address.as_deref(),
        )?;

        let prepared = build_issuance(
            request.campaign.as_deref().unwrap_or_default(),
            request.wallet_address.as_deref().unwrap_or_default(),
            &request.card_id,
            request.platform,
        );
        let correlation_id = prepared.correlation_id.clone();

        let mut subscription = self
            .streams
            .subscribe(CompletionChannel::PassIssuance, &correlation_id)
            .await?;

        let body = IssuanceRequestBodyDTO::from(&prepared.request);
        if let Err(error) = self.issuance.trigger(prepared.endpoint, &body).await {
            subscription.close();
            return Err(error);
        }
        tracing::info!(%correlation_id, "Pass requested, waiting for completion");

        let file_url = CompletionWaiter::new(self.config.pass_timeout)
            .wait(subscription, decode_pass_message)
            .await?;

        Ok(ClaimedPassDTO {
            correlation_id,
            file_url,
        })
    }

    /// Submits merchant WiFi credentials and waits for the setup outcome.
    pub async fn setup_wifi(
        &self,
        request: WifiSetupClaimRequestDTO,
    ) -> Result<WifiSetupOutcomeDTO, ServiceError> {
        let setup_id = CorrelationId::random_wifi_setup();

        let mut subscription = self
            .streams
            .subscribe(CompletionChannel::WifiSetup, &setup_id)
            .await?;

        let body = wifi_setup_body(request, &setup_id, &self.config.backend_url);
        if let Err(error) = self.issuance.trigger(WIFI_SETUP_PATH, &body).await {
            subscription.close();
            return Err(error);
        }
        tracing::info!(%setup_id, "WiFi setup requested, waiting for completion");

        let result = CompletionWaiter::new(self.config.wifi_setup_timeout)
            .wait(subscription, decode_wifi_setup_message)
            .await?;

        Ok(WifiSetupOutcomeDTO {
            setup_id,
            status: result.status,
            message: result.message,
        })
    }

    /// One non-blocking look at the pass relay. `None` while not ready.
    pub async fn poll_pass_result(
        &self,
        id: &CorrelationId,
    ) -> Result<Option<String>, ServiceError> {
        let mut url = backend_endpoint(&self.config.backend_url, PASS_RESULT_PATH)
            .map_err(|error| ServiceError::MappingError(error.to_string()))?;
        url.query_pairs_mut().append_pair("id", id.as_str());

        let response = self.client.get(url.as_str()).send().await?;

        if response.status.0 == 404 {
            return Ok(None);
        }

        if !response.status.is_success() {
            return Err(UpstreamError::Rejected {
                status: response.status.0,
                message: response
                    .error_message()
                    .unwrap_or_else(|| response.status.to_string()),
            }
            .into());
        }

        let body: PassPollResponseDTO = response.json()?;
        Ok(Some(body.file_url))
    }
}
