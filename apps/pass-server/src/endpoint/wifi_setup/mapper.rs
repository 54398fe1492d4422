use pass_core::service::wifi_setup::dto::WifiSetupRequestDTO;

use super::dto::WifiSetupRequestRestDTO;

impl From<WifiSetupRequestRestDTO> for WifiSetupRequestDTO {
    fn from(value: WifiSetupRequestRestDTO) -> Self {
        Self {
            username: value.username,
            password: value.password,
            ssid: value.ssid,
            wifi_password: value.wifi_password,
            setup_id: value.setup_id,
            base_url: value.base_url,
        }
    }
}
