use serde::Serialize;

#[derive(Clone, Debug, Default)]
pub struct CreateApplePassRequestDTO {
    pub campaign: Option<String>,
    pub eth_address: Option<String>,
    pub card_id: Option<String>,
}

/// Job submitted to the pass service; `externalId` comes back in the
/// completion event as `id`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApplePassJobDTO {
    pub campaign: String,
    pub eth_address: String,
    pub card_id: String,
    pub external_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}
