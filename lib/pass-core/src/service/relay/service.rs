use tokio::sync::broadcast::error::RecvError;

use super::dto::{IngestResponseDTO, PassCallbackRequestDTO, WifiSetupCallbackRequestDTO};
use super::mapper::not_found;
use super::validator::{validate_pass_callback, validate_read_id, validate_wifi_setup_callback};
use super::{PassResultRelay, RelayService, RelayedResult, WifiSetupRelay};
use crate::model::completion::{NotReadyReason, PassResult, WifiSetupResult};
use crate::model::correlation_id::CorrelationId;
use crate::service::error::{CompletionError, ServiceError};

impl<T: RelayedResult> RelayService<T> {
    /// Stores a completion result and wakes every stream waiting on `id`.
    pub async fn ingest(&self, id: CorrelationId, value: T) -> IngestResponseDTO {
        let report = self.store.upsert(id.clone(), value).await;
        if report.expired > 0 || report.pruned > 0 {
            tracing::debug!(
                expired = report.expired,
                pruned = report.pruned,
                "Relay table swept"
            );
        }

        if self.arrivals.send(id.clone()).is_err() {
            tracing::trace!(%id, "No stream waiting for result");
        }

        IngestResponseDTO {
            id: id.to_string(),
            expired: report.expired,
        }
    }

    /// Correlation id of a read or stream request, absent and empty ids are
    /// rejected.
    pub fn requested_id(&self, id: Option<&str>) -> Result<CorrelationId, ServiceError> {
        Ok(CorrelationId::from(validate_read_id(id)?))
    }

    /// Hands out the result for `id` and forgets it.
    pub async fn read(&self, id: Option<&str>) -> Result<T, ServiceError> {
        let id = self.requested_id(id)?;

        let value = self
            .store
            .take(&id)
            .await
            .map_err(|reason| not_found::<T>(&id, reason))?;

        tracing::info!(%id, "Relayed result delivered");
        Ok(value)
    }

    /// Resolves once a result for `id` is available and consumes it, or fails
    /// after the stream timeout.
    pub async fn wait_for(&self, id: CorrelationId) -> Result<T, CompletionError> {
        // subscribe before the first look so an ingest in between is not missed
        let mut arrivals = self.arrivals.subscribe();

        let wait = async {
            loop {
                match self.store.take(&id).await {
                    Ok(value) => return Ok(value),
                    Err(NotReadyReason::Expired) => {
                        return Err(CompletionError::Failed(format!("result for {id} expired")));
                    }
                    Err(NotReadyReason::Pending | NotReadyReason::Delivered) => {}
                }

                loop {
                    match arrivals.recv().await {
                        Ok(arrived) if arrived == id => break,
                        Ok(_) => continue,
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::debug!(skipped, "Relay arrivals lagged, rechecking");
                            break;
                        }
                        Err(RecvError::Closed) => {
                            return Err(CompletionError::Stream("relay closed".to_string()));
                        }
                    }
                }
            }
        };

        let result = tokio::time::timeout(self.stream_timeout, wait)
            .await
            .map_err(|_| CompletionError::Timeout(self.stream_timeout))?;

        if result.is_ok() {
            tracing::info!(%id, "Relayed result streamed");
        }
        result
    }

    pub async fn pending_count(&self) -> usize {
        self.store.pending_count().await
    }
}

impl PassResultRelay {
    pub async fn ingest_pass_callback(
        &self,
        request: PassCallbackRequestDTO,
    ) -> Result<IngestResponseDTO, ServiceError> {
        validate_pass_callback(&request)?;

        let (Some(id), Some(file_url)) = (request.id, request.file_url) else {
            return Err(ServiceError::MappingError("validated fields missing".to_string()));
        };

        tracing::info!(
            %id,
            signed = request.signed_message.is_some(),
            "Pass completion received"
        );

        Ok(self.ingest(id.into(), PassResult { file_url }).await)
    }
}

impl WifiSetupRelay {
    pub async fn ingest_wifi_setup_callback(
        &self,
        request: WifiSetupCallbackRequestDTO,
    ) -> Result<IngestResponseDTO, ServiceError> {
        let status = validate_wifi_setup_callback(&request)?;

        let Some(id) = request.id else {
            return Err(ServiceError::MappingError("validated id missing".to_string()));
        };

        tracing::info!(%id, %status, "WiFi setup completion received");

        Ok(self
            .ingest(
                id.into(),
                WifiSetupResult {
                    status,
                    message: request.message,
                },
            )
            .await)
    }
}
