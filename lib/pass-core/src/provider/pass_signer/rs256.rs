use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};

use super::{PassSignerError, PassTokenSigner};
use crate::model::google_wallet::SaveToWalletClaims;

pub struct Rs256TokenSigner {
    key: EncodingKey,
}

impl Rs256TokenSigner {
    /// Keys pasted into env variables often carry literal `\n`, those are unescaped first.
    pub fn from_pem(private_key: &SecretString) -> Result<Self, PassSignerError> {
        let pem = private_key.expose_secret().replace("\\n", "\n");
        let key = EncodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|error| PassSignerError::InvalidKey(error.to_string()))?;

        Ok(Self { key })
    }
}

impl PassTokenSigner for Rs256TokenSigner {
    fn sign(&self, claims: &SaveToWalletClaims) -> Result<String, PassSignerError> {
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), claims, &self.key)
            .map_err(|error| PassSignerError::Signing(error.to_string()))
    }
}
