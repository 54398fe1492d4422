use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Completion event posted by the pass service.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PassCallbackRequestRestDTO {
    /// Correlation id, `{cardId}-{ethAddress}`
    pub id: Option<String>,
    pub result: Option<PassCallbackResultRestDTO>,
    pub signed_message: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub(crate) struct PassCallbackResultRestDTO {
    #[serde(rename = "fileURL")]
    pub file_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct CallbackAcceptedResponseRestDTO {
    pub success: bool,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct RelayQueryParams {
    /// Correlation id of the awaited result
    pub id: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct PassResultResponseRestDTO {
    /// Download location of the finished pass
    #[serde(rename = "fileURL")]
    pub file_url: String,
}
