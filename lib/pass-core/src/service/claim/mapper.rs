use super::dto::{WifiSetupBodyDTO, WifiSetupClaimRequestDTO};
use crate::model::correlation_id::CorrelationId;

pub(super) fn wifi_setup_body(
    request: WifiSetupClaimRequestDTO,
    setup_id: &CorrelationId,
    base_url: &str,
) -> WifiSetupBodyDTO {
    WifiSetupBodyDTO {
        username: request.username,
        password: request.password,
        ssid: request.ssid,
        wifi_password: request.wifi_password,
        setup_id: setup_id.to_string(),
        base_url: base_url.to_owned(),
    }
}
