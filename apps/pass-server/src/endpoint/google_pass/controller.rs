use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;

use super::dto::{CreateSaveTokenRequestRestDTO, CreateSaveTokenResponseRestDTO};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/jwtToken",
    request_body = CreateSaveTokenRequestRestDTO,
    responses(OkOrErrorResponse<CreateSaveTokenResponseRestDTO>),
    tag = "google_pass",
    summary = "Create Google Wallet token",
    description = "Signs a save-to-wallet token holding one loyalty object for the card holder.",
)]
pub(crate) async fn post_save_token(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateSaveTokenRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<CreateSaveTokenResponseRestDTO> {
    let result = state
        .core
        .google_pass_service
        .create_save_token(request.into());

    OkOrErrorResponse::from_result(result, state, "creating Google Wallet token")
}
