use super::dto::{PassCompletionMessageDTO, WifiSetupCompletionMessageDTO};
use crate::model::completion::{SetupStatus, WifiSetupResult};
use crate::service::error::CompletionError;

/// `Ok(None)` means the message is well formed but not a completion, the
/// waiter keeps listening.
pub type MessageDecoder<T> = fn(&str) -> Result<Option<T>, CompletionError>;

pub fn decode_pass_message(data: &str) -> Result<Option<String>, CompletionError> {
    let message: PassCompletionMessageDTO = serde_json::from_str(data)
        .map_err(|error| CompletionError::Stream(format!("unparseable message: {error}")))?;

    Ok(message.file_url.filter(|url| !url.is_empty()))
}

pub fn decode_wifi_setup_message(data: &str) -> Result<Option<WifiSetupResult>, CompletionError> {
    let message: WifiSetupCompletionMessageDTO = serde_json::from_str(data)
        .map_err(|error| CompletionError::Stream(format!("unparseable message: {error}")))?;

    match message.status {
        Some(SetupStatus::Success) => Ok(Some(WifiSetupResult {
            status: SetupStatus::Success,
            message: message.message,
        })),
        Some(SetupStatus::Error) => Err(CompletionError::Failed(
            message
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| "WiFi setup failed".to_string()),
        )),
        None => Ok(None),
    }
}
