use pass_core::model::completion::{SetupStatus, WifiSetupResult};
use pass_core::service::relay::dto::WifiSetupCallbackRequestDTO;

use super::dto::{
    SetupStatusRestEnum, WifiSetupCallbackRequestRestDTO, WifiSetupResultResponseRestDTO,
};

impl From<SetupStatusRestEnum> for SetupStatus {
    fn from(value: SetupStatusRestEnum) -> Self {
        match value {
            SetupStatusRestEnum::Success => Self::Success,
            SetupStatusRestEnum::Error => Self::Error,
        }
    }
}

impl From<SetupStatus> for SetupStatusRestEnum {
    fn from(value: SetupStatus) -> Self {
        match value {
            SetupStatus::Success => Self::Success,
            SetupStatus::Error => Self::Error,
        }
    }
}

impl From<WifiSetupCallbackRequestRestDTO> for WifiSetupCallbackRequestDTO {
    fn from(value: WifiSetupCallbackRequestRestDTO) -> Self {
        Self {
            id: value.id,
            status: value.status.map(Into::into),
            message: value.message,
        }
    }
}

impl From<WifiSetupResult> for WifiSetupResultResponseRestDTO {
    fn from(value: WifiSetupResult) -> Self {
        Self {
            status: value.status.into(),
            message: value.message,
        }
    }
}
