//! In-memory broker between the completion notifier and pass readers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

use crate::model::completion::{PassResult, WifiSetupResult};
use crate::model::correlation_id::CorrelationId;
use crate::proto::clock::Clock;

pub mod dto;
pub mod mapper;
pub mod service;
pub mod store;
pub mod validator;


const ARRIVAL_CHANNEL_CAPACITY: usize = 256;

/// A value the relay can hold for one reader.
pub trait RelayedResult: Clone + Send + Sync + 'static {
    /// `error` text of a read that finds nothing.
    const NOT_READY_MESSAGE: &'static str;
}

impl RelayedResult for PassResult {
    const NOT_READY_MESSAGE: &'static str = "Pass not ready yet";
}

impl RelayedResult for WifiSetupResult {
    const NOT_READY_MESSAGE: &'static str = "WiFi setup result not ready yet";
}

pub type PassResultRelay = RelayService<PassResult>;
pub type WifiSetupRelay = RelayService<WifiSetupResult>;

/// Cheap to clone; all clones share one result table.
pub struct RelayService<T> {
    store: Arc<store::ResultStore<T>>,
    arrivals: broadcast::Sender<CorrelationId>,
    stream_timeout: Duration,
}

impl<T> Clone for RelayService<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            arrivals: self.arrivals.clone(),
            stream_timeout: self.stream_timeout,
        }
    }
}

impl<T: RelayedResult> RelayService<T> {
    pub fn new(clock: Arc<dyn Clock>, retention: Duration, stream_timeout: Duration) -> Self {
        let (arrivals, _) = broadcast::channel(ARRIVAL_CHANNEL_CAPACITY);

        Self {
            store: Arc::new(store::ResultStore::new(clock, retention)),
            arrivals,
            stream_timeout,
        }
    }
}
