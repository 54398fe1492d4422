//! Subscriptions to the server-pushed completion event stream.

use thiserror::Error;

use crate::model::correlation_id::CorrelationId;

pub mod sse;

#[derive(Debug, Error)]
pub enum CompletionStreamError {
    #[error("Subscription failed: `{0}`")]
    Subscribe(String),
    #[error("Stream transport error: `{0}`")]
    Transport(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionChannel {
    PassIssuance,
    WifiSetup,
}

impl CompletionChannel {
    pub fn events_path(&self) -> &'static str {
        match self {
            CompletionChannel::PassIssuance => "/api/wallet-pass-callback/events",
            CompletionChannel::WifiSetup => "/api/wifi-setup-callback/events",
        }
    }
}

/// One open event stream.
///
/// `next_message` yields the data payload of each default-type event in
/// arrival order; `None` means the server ended the stream.
#[async_trait::async_trait]
pub trait CompletionSubscription: Send {
    async fn next_message(&mut self) -> Option<Result<String, CompletionStreamError>>;

    /// Releases the connection. Safe to call more than once.
    fn close(&mut self);
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionStreamProvider: Send + Sync {
    async fn subscribe(
        &self,
        channel: CompletionChannel,
        id: &CorrelationId,
    ) -> Result<Box<dyn CompletionSubscription>, CompletionStreamError>;
}
