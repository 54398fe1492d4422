use serde::Deserialize;
use utoipa::ToSchema;

/// Accepted as JSON or as an `application/x-www-form-urlencoded` form post.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateApplePassRequestRestDTO {
    pub campaign: Option<String>,
    pub eth_address: Option<String>,
    pub card_id: Option<String>,
}
