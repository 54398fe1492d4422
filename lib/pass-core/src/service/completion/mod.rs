//! Waits for the completion event of an accepted issuance.

use std::time::Duration;

pub mod dto;
pub mod mapper;
pub mod service;


pub const PASS_ISSUANCE_TIMEOUT: Duration = Duration::from_secs(10);
pub const WIFI_SETUP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Copy, Debug)]
pub struct CompletionWaiter {
    timeout: Duration,
}

impl CompletionWaiter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
