use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;

use super::dto::WifiSetupRequestRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::PassthroughOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/wifi-setup",
    request_body = WifiSetupRequestRestDTO,
    responses(PassthroughOrErrorResponse),
    tag = "wifi_setup",
    summary = "Provision merchant WiFi",
    description = indoc::formatdoc! {"
        Forwards merchant credentials to the provisioning service and returns
        its answer unchanged. The outcome is reported later on
        `/api/wifi-setup-callback` under `setupId`.
    "},
)]
pub(crate) async fn post_wifi_setup(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<WifiSetupRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> PassthroughOrErrorResponse {
    let result = state.core.wifi_setup_service.setup(request.into()).await;

    PassthroughOrErrorResponse::from_result(result, state, "forwarding WiFi setup")
}
