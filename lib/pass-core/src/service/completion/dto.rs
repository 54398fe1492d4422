use serde::Deserialize;

use crate::model::completion::SetupStatus;

#[derive(Clone, Debug, Deserialize)]
pub struct PassCompletionMessageDTO {
    #[serde(rename = "fileURL")]
    pub file_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WifiSetupCompletionMessageDTO {
    pub status: Option<SetupStatus>,
    pub message: Option<String>,
}
