use super::dto::WifiSetupRequestDTO;
use super::validator::validate_wifi_setup_request;
use super::{WIFI_SETUP_UPSTREAM_PATH, WifiSetupService};
use crate::proto::upstream::UpstreamResponse;
use crate::service::error::ServiceError;

impl WifiSetupService {
    /// Forwards the credentials; the upstream answer is passed back as is.
    /// The setup result arrives later on the WiFi setup callback.
    pub async fn setup(&self, request: WifiSetupRequestDTO) -> Result<UpstreamResponse, ServiceError> {
        validate_wifi_setup_request(&request)?;

        let response = self
            .upstream
            .forward(WIFI_SETUP_UPSTREAM_PATH, &request)
            .await
            .map_err(|error| match error {
                ServiceError::Upstream(upstream) => ServiceError::WifiSetupFailed(upstream),
                other => other,
            })?;

        tracing::info!(
            setup_id = request.setup_id.as_deref().unwrap_or_default(),
            status = response.status,
            "WiFi setup forwarded"
        );
        Ok(response)
    }
}
