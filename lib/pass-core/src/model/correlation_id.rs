use std::fmt::{self, Display};

use rand::Rng;
use serde::{Deserialize, Serialize};

const WIFI_SETUP_PREFIX: &str = "XX-wifi-setup-";
const WIFI_SETUP_SUFFIX_LENGTH: usize = 9;
const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Links an issuance request to its completion event.
///
/// Two concurrent pass requests for the same card and wallet share an id and
/// cannot be told apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(String);

impl CorrelationId {
    pub fn for_pass(card_id: &str, wallet_address: &str) -> Self {
        Self(format!("{card_id}-{wallet_address}"))
    }

    pub fn random_wifi_setup() -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..WIFI_SETUP_SUFFIX_LENGTH)
            .map(|_| BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())] as char)
            .collect();

        Self(format!("{WIFI_SETUP_PREFIX}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CorrelationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CorrelationId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for CorrelationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
