use thiserror::Error;

use crate::model::google_wallet::SaveToWalletClaims;

pub mod rs256;

#[derive(Debug, Error)]
pub enum PassSignerError {
    #[error("Invalid signing key: `{0}`")]
    InvalidKey(String),
    #[error("Signing failed: `{0}`")]
    Signing(String),
}

/// Turns "save to wallet" claims into a compact JWT.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait PassTokenSigner: Send + Sync {
    fn sign(&self, claims: &SaveToWalletClaims) -> Result<String, PassSignerError>;
}
