use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;

use super::dto::CreateApplePassRequestRestDTO;
use super::mapper::parse_request_body;
use crate::dto::response::{ErrorResponse, PassthroughOrErrorResponse};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/generatePkpass",
    request_body(
        content = CreateApplePassRequestRestDTO,
        description = "Also accepted as `application/x-www-form-urlencoded`",
        content_type = "application/json"
    ),
    responses(PassthroughOrErrorResponse),
    tag = "apple_pass",
    summary = "Request Apple Wallet pass",
    description = indoc::formatdoc! {"
        Starts pass generation at the wallet pass service. The service status
        and body are returned unchanged; the finished pass is announced on
        `/api/wallet-pass-callback`.
    "},
)]
pub(crate) async fn post_generate_pkpass(
    state: State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> PassthroughOrErrorResponse {
    let request = match parse_request_body(&headers, &body) {
        Ok(request) => request,
        Err(error) => {
            return ErrorResponse::BadRequest(
                error.hide_cause(state.config.hide_error_response_cause),
            )
            .into();
        }
    };

    let result = state
        .core
        .apple_pass_service
        .create_pass(request.into())
        .await;

    PassthroughOrErrorResponse::from_result(result, state, "requesting Apple pass")
}
