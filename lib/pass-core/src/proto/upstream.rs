//! Forwarding of server requests to the external wallet pass service.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::provider::http_client::{self, HttpClient};
use crate::service::error::{ServiceError, UpstreamError};

/// Upstream answer relayed verbatim to the original caller.
#[derive(Clone, Debug, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

pub struct UpstreamForwarder {
    client: Arc<dyn HttpClient>,
    base_url: Option<String>,
    bearer_token: Option<SecretString>,
}

impl UpstreamForwarder {
    pub fn new(
        client: Arc<dyn HttpClient>,
        base_url: Option<String>,
        bearer_token: Option<SecretString>,
    ) -> Self {
        Self {
            client,
            base_url,
            bearer_token,
        }
    }

    /// POSTs `body` as JSON to `{base_url}{path}`. Any HTTP status is a
    /// successful forward; only transport and decoding problems are errors.
    pub async fn forward<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<UpstreamResponse, ServiceError> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or(ServiceError::MissingUpstream)?;
        let url = format!("{}{path}", base_url.trim_end_matches('/'));

        let mut request = self.client.post(&url).json(body)?;
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|error| match error {
            http_client::Error::HttpError(message) => UpstreamError::Transport(message),
            other => UpstreamError::Transport(other.to_string()),
        })?;

        let body = if response.body.is_empty() {
            serde_json::Value::Null
        } else {
            response
                .json::<serde_json::Value>()
                .map_err(|error| UpstreamError::InvalidBody(error.to_string()))?
        };

        if !response.status.is_success() {
            tracing::warn!(%url, status = %response.status, "Upstream returned an error status");
        }

        Ok(UpstreamResponse {
            status: response.status.0,
            body,
        })
    }
}
