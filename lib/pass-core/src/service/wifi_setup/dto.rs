use serde::{Deserialize, Serialize};

/// Credentials entered by the merchant. Same shape on the way in and on the
/// way upstream.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiSetupRequestDTO {
    pub username: Option<String>,
    pub password: Option<String>,
    pub ssid: Option<String>,
    pub wifi_password: Option<String>,
    pub setup_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}
