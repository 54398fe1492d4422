use super::dto::WifiSetupRequestDTO;
use crate::service::error::ValidationError;
use crate::service::issuance::validator::is_blank;

pub(super) fn validate_wifi_setup_request(
    request: &WifiSetupRequestDTO,
) -> Result<(), ValidationError> {
    let required = [
        &request.username,
        &request.password,
        &request.ssid,
        &request.wifi_password,
        &request.setup_id,
    ];

    if required.iter().any(|field| is_blank(field.as_deref())) {
        return Err(ValidationError::MissingWifiSetupFields);
    }

    Ok(())
}
