use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;

use super::dto::{
    CallbackAcceptedResponseRestDTO, PassCallbackRequestRestDTO, PassResultResponseRestDTO,
    RelayQueryParams,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{ErrorResponse, OkOrErrorResponse};
use crate::endpoint::event_stream::completion_events;
use crate::extractor::Qs;
use crate::metrics::{Relay, RelayEvent, track_relay_event};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/wallet-pass-callback",
    request_body = PassCallbackRequestRestDTO,
    responses(OkOrErrorResponse<CallbackAcceptedResponseRestDTO>),
    tag = "wallet_pass_relay",
    summary = "Report finished pass",
    description = indoc::formatdoc! {"
        Called by the pass service once a pass is generated. The download
        location is held for one reader; a later event for the same id
        replaces it.
    "},
)]
pub(crate) async fn post_pass_callback(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<PassCallbackRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<CallbackAcceptedResponseRestDTO> {
    let result = state
        .core
        .pass_relay
        .ingest_pass_callback(request.into())
        .await;

    if result.is_ok() {
        track_relay_event(Relay::WalletPass, RelayEvent::Ingested);
    }

    OkOrErrorResponse::from_result(result, state, "receiving pass completion")
}

#[utoipa::path(
    get,
    path = "/api/wallet-pass-callback",
    params(RelayQueryParams),
    responses(OkOrErrorResponse<PassResultResponseRestDTO>),
    tag = "wallet_pass_relay",
    summary = "Fetch finished pass",
    description = indoc::formatdoc! {"
        Returns the download location for `id` and forgets it. Responds with
        `404` while nothing has arrived, and again once the result has been
        read or has expired.
    "},
)]
pub(crate) async fn get_pass_result(
    state: State<AppState>,
    WithRejection(Qs(query), _): WithRejection<Qs<RelayQueryParams>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<PassResultResponseRestDTO> {
    let result = state.core.pass_relay.read(query.id.as_deref()).await;

    if result.is_ok() {
        track_relay_event(Relay::WalletPass, RelayEvent::Read);
    }

    OkOrErrorResponse::from_result(result, state, "reading pass result")
}

#[utoipa::path(
    get,
    path = "/api/wallet-pass-callback/events",
    params(RelayQueryParams),
    responses(
        (status = 200, description = "One `message` event with `{fileURL}`", content_type = "text/event-stream"),
        ErrorResponse,
    ),
    tag = "wallet_pass_relay",
    summary = "Stream finished pass",
    description = indoc::formatdoc! {"
        Server-sent event stream delivering the pass for `id` as soon as it
        arrives. The result is consumed by the stream. Without a result the
        stream ends after the configured stream timeout.
    "},
)]
pub(crate) async fn get_pass_events(
    state: State<AppState>,
    WithRejection(Qs(query), _): WithRejection<Qs<RelayQueryParams>, ErrorResponseRestDTO>,
) -> axum::response::Response {
    let relay = state.core.pass_relay.clone();

    match relay.requested_id(query.id.as_deref()) {
        Ok(id) => completion_events(relay, id, |result| {
            track_relay_event(Relay::WalletPass, RelayEvent::Streamed);
            PassResultResponseRestDTO::from(result)
        })
        .into_response(),
        Err(error) => {
            ErrorResponse::from_service_error_with_trace(error, state, "streaming pass result")
                .into_response()
        }
    }
}
