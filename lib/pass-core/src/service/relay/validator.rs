use super::dto::{PassCallbackRequestDTO, WifiSetupCallbackRequestDTO};
use crate::model::completion::SetupStatus;
use crate::service::error::ValidationError;
use crate::service::issuance::validator::is_blank;

pub(super) fn validate_pass_callback(
    request: &PassCallbackRequestDTO,
) -> Result<(), ValidationError> {
    if is_blank(request.id.as_deref()) || is_blank(request.file_url.as_deref()) {
        return Err(ValidationError::MissingCallbackFields);
    }

    Ok(())
}

pub(super) fn validate_wifi_setup_callback(
    request: &WifiSetupCallbackRequestDTO,
) -> Result<SetupStatus, ValidationError> {
    if is_blank(request.id.as_deref()) {
        return Err(ValidationError::MissingWifiCallbackFields);
    }

    request
        .status
        .ok_or(ValidationError::MissingWifiCallbackFields)
}

pub(super) fn validate_read_id(id: Option<&str>) -> Result<&str, ValidationError> {
    id.filter(|id| !id.is_empty())
        .ok_or(ValidationError::MissingId)
}
