use serde::Serialize;

use super::IssuanceService;
use crate::provider::http_client;
use crate::service::error::{ServiceError, UpstreamError};
use crate::util::backend_url::backend_endpoint;

impl IssuanceService {
    /// Posts the issuance request. Success only means the backend accepted the
    /// job; the pass itself arrives later through the completion stream.
    pub async fn trigger<B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(), ServiceError> {
        let url = backend_endpoint(&self.backend_url, endpoint)
            .map_err(|error| ServiceError::MappingError(error.to_string()))?;

        let response = self
            .client
            .post(url.as_str())
            .json(body)?
            .send()
            .await
            .map_err(|error| match error {
                http_client::Error::HttpError(message) => UpstreamError::Transport(message),
                other => UpstreamError::Transport(other.to_string()),
            })?;

        if response.status.is_success() {
            tracing::info!(%url, "Issuance accepted");
            return Ok(());
        }

        let message = response
            .error_message()
            .or_else(|| response.status.canonical_reason().map(ToOwned::to_owned))
            .unwrap_or_else(|| format!("HTTP {}", response.status));
        tracing::warn!(%url, status = %response.status, %message, "Issuance rejected");

        Err(UpstreamError::Rejected {
            status: response.status.0,
            message,
        }
        .into())
    }
}
