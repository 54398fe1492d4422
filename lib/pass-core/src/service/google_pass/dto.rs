#[derive(Clone, Debug, Default)]
pub struct CreateSaveTokenRequestDTO {
    pub campaign: Option<String>,
    pub eth_address: Option<String>,
    pub card_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateSaveTokenResponseDTO {
    pub token: String,
}
