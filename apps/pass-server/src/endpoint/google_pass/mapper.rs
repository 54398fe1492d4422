use pass_core::service::google_pass::dto::{
    CreateSaveTokenRequestDTO, CreateSaveTokenResponseDTO,
};

use super::dto::{CreateSaveTokenRequestRestDTO, CreateSaveTokenResponseRestDTO};

impl From<CreateSaveTokenRequestRestDTO> for CreateSaveTokenRequestDTO {
    fn from(value: CreateSaveTokenRequestRestDTO) -> Self {
        Self {
            campaign: value.campaign,
            eth_address: value.eth_address,
            card_id: value.card_id,
        }
    }
}

impl From<CreateSaveTokenResponseDTO> for CreateSaveTokenResponseRestDTO {
    fn from(value: CreateSaveTokenResponseDTO) -> Self {
        Self { token: value.token }
    }
}
