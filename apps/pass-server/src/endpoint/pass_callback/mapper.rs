use pass_core::model::completion::PassResult;
use pass_core::service::relay::dto::{IngestResponseDTO, PassCallbackRequestDTO};

use super::dto::{
    CallbackAcceptedResponseRestDTO, PassCallbackRequestRestDTO, PassResultResponseRestDTO,
};

impl From<PassCallbackRequestRestDTO> for PassCallbackRequestDTO {
    fn from(value: PassCallbackRequestRestDTO) -> Self {
        Self {
            id: value.id,
            file_url: value.result.and_then(|result| result.file_url),
            signed_message: value.signed_message,
        }
    }
}

impl From<IngestResponseDTO> for CallbackAcceptedResponseRestDTO {
    fn from(_: IngestResponseDTO) -> Self {
        Self { success: true }
    }
}

impl From<PassResult> for PassResultResponseRestDTO {
    fn from(value: PassResult) -> Self {
        Self {
            file_url: value.file_url,
        }
    }
}
