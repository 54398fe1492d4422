use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SetupStatusRestEnum {
    Success,
    Error,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub(crate) struct WifiSetupCallbackRequestRestDTO {
    /// The `setupId` of the original request
    pub id: Option<String>,
    pub status: Option<SetupStatusRestEnum>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct WifiSetupResultResponseRestDTO {
    pub status: SetupStatusRestEnum,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
