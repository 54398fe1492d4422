use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;

use super::dto::{WifiSetupCallbackRequestRestDTO, WifiSetupResultResponseRestDTO};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{ErrorResponse, OkOrErrorResponse};
use crate::endpoint::event_stream::completion_events;
use crate::endpoint::pass_callback::dto::{CallbackAcceptedResponseRestDTO, RelayQueryParams};
use crate::extractor::Qs;
use crate::metrics::{Relay, RelayEvent, track_relay_event};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/wifi-setup-callback",
    request_body = WifiSetupCallbackRequestRestDTO,
    responses(OkOrErrorResponse<CallbackAcceptedResponseRestDTO>),
    tag = "wifi_setup_relay",
    summary = "Report WiFi setup outcome",
)]
pub(crate) async fn post_wifi_setup_callback(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<WifiSetupCallbackRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<CallbackAcceptedResponseRestDTO> {
    let result = state
        .core
        .wifi_setup_relay
        .ingest_wifi_setup_callback(request.into())
        .await;

    if result.is_ok() {
        track_relay_event(Relay::WifiSetup, RelayEvent::Ingested);
    }

    OkOrErrorResponse::from_result(result, state, "receiving WiFi setup completion")
}

#[utoipa::path(
    get,
    path = "/api/wifi-setup-callback",
    params(RelayQueryParams),
    responses(OkOrErrorResponse<WifiSetupResultResponseRestDTO>),
    tag = "wifi_setup_relay",
    summary = "Fetch WiFi setup outcome",
    description = "Returns the outcome for `id` once and forgets it.",
)]
pub(crate) async fn get_wifi_setup_result(
    state: State<AppState>,
    WithRejection(Qs(query), _): WithRejection<Qs<RelayQueryParams>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<WifiSetupResultResponseRestDTO> {
    let result = state.core.wifi_setup_relay.read(query.id.as_deref()).await;

    if result.is_ok() {
        track_relay_event(Relay::WifiSetup, RelayEvent::Read);
    }

    OkOrErrorResponse::from_result(result, state, "reading WiFi setup result")
}

#[utoipa::path(
    get,
    path = "/api/wifi-setup-callback/events",
    params(RelayQueryParams),
    responses(
        (status = 200, description = "One `message` event with `{status, message}`", content_type = "text/event-stream"),
        ErrorResponse,
    ),
    tag = "wifi_setup_relay",
    summary = "Stream WiFi setup outcome",
)]
pub(crate) async fn get_wifi_setup_events(
    state: State<AppState>,
    WithRejection(Qs(query), _): WithRejection<Qs<RelayQueryParams>, ErrorResponseRestDTO>,
) -> axum::response::Response {
    let relay = state.core.wifi_setup_relay.clone();

    match relay.requested_id(query.id.as_deref()) {
        Ok(id) => completion_events(relay, id, |result| {
            track_relay_event(Relay::WifiSetup, RelayEvent::Streamed);
            WifiSetupResultResponseRestDTO::from(result)
        })
        .into_response(),
        Err(error) => ErrorResponse::from_service_error_with_trace(
            error,
            state,
            "streaming WiFi setup result",
        )
        .into_response(),
    }
}
