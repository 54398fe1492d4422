use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WifiSetupRequestRestDTO {
    /// Merchant portal login
    pub username: Option<String>,
    pub password: Option<String>,
    pub ssid: Option<String>,
    pub wifi_password: Option<String>,
    /// Correlation id the setup result is reported under
    pub setup_id: Option<String>,
    /// Public URL of the caller, lets the provisioning service report back
    pub base_url: Option<String>,
}
