use crate::model::completion::SetupStatus;

/// Pass completion event as posted by the notifier. Every field may be absent
/// on the wire; validation decides.
#[derive(Clone, Debug, Default)]
pub struct PassCallbackRequestDTO {
    pub id: Option<String>,
    pub file_url: Option<String>,
    pub signed_message: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct WifiSetupCallbackRequestDTO {
    pub id: Option<String>,
    pub status: Option<SetupStatus>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestResponseDTO {
    pub id: String,
    pub expired: usize,
}
