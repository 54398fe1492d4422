use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use pass_core::service::apple_pass::dto::CreateApplePassRequestDTO;

use super::dto::CreateApplePassRequestRestDTO;
use crate::dto::error::ErrorResponseRestDTO;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl From<CreateApplePassRequestRestDTO> for CreateApplePassRequestDTO {
    fn from(value: CreateApplePassRequestRestDTO) -> Self {
        Self {
            campaign: value.campaign,
            eth_address: value.eth_address,
            card_id: value.card_id,
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE))
}

/// Form posts come from the plain HTML fallback, everything else is read as
/// JSON. An empty body reads as an empty request.
pub(crate) fn parse_request_body(
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<CreateApplePassRequestRestDTO, ErrorResponseRestDTO> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateApplePassRequestRestDTO::default());
    }

    if is_form(headers) {
        serde_urlencoded::from_bytes(body).map_err(|error| {
            ErrorResponseRestDTO::input_validation(format!("Failed to parse form body: {error}"))
        })
    } else {
        serde_json::from_slice(body).map_err(|error| {
            ErrorResponseRestDTO::input_validation(format!("Failed to parse JSON body: {error}"))
        })
    }
}
