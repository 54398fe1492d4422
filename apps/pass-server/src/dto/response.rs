use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use pass_core::proto::upstream::UpstreamResponse;
use pass_core::service::error::{ErrorCode, ServiceError};
use serde::Serialize;
use utoipa::ToSchema;

use super::error::{Cause, ErrorResponseRestDTO};
use crate::router::AppState;

#[derive(utoipa::IntoResponses)]
pub(crate) enum ErrorResponse {
    #[response(status = 400, description = "Bad Request")]
    BadRequest(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 404, description = "Result not available")]
    NotFound(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 500, description = "Internal error")]
    ServerError(#[to_schema] ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub fn for_panic(panic_msg: String) -> Self {
        Self::ServerError(ErrorResponseRestDTO {
            error: panic_msg,
            code: ErrorCode::BR_0000.into(),
            status: None,
            cause: Some(Cause {
                message: "Panic".to_string(),
            }),
        })
    }

    pub fn from_service_error(error: ServiceError, hide_cause: bool) -> Self {
        let response = ErrorResponseRestDTO::from(&error).hide_cause(hide_cause);
        match error {
            ServiceError::Validation(_) => Self::BadRequest(response),
            ServiceError::NotFound(_) => Self::NotFound(response),
            _ => Self::ServerError(response),
        }
    }

    #[track_caller]
    pub fn from_service_error_with_trace(
        error: ServiceError,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        let location = std::panic::Location::caller();
        match &error {
            ServiceError::Validation(_) | ServiceError::NotFound(_) => {
                tracing::info!(%error, %location, "Rejected while {action_description}");
            }
            _ => tracing::error!(%error, %location, "Error while {action_description}"),
        }
        Self::from_service_error(error, state.config.hide_error_response_cause)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::BadRequest(error) => (StatusCode::BAD_REQUEST, Json(error)).into_response(),
            Self::NotFound(error) => (StatusCode::NOT_FOUND, Json(error)).into_response(),
            Self::ServerError(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
        }
    }
}

fn with_error_responses<SuccessResponse: utoipa::IntoResponses>()
-> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
    use utoipa::IntoResponses;
    let mut responses = SuccessResponse::responses();
    responses.append(&mut ErrorResponse::responses());
    responses
}

pub(crate) enum OkOrErrorResponse<T> {
    Ok(T),
    Error(ErrorResponse),
}

impl<T> OkOrErrorResponse<T> {
    pub fn ok(value: impl Into<T>) -> Self {
        Self::Ok(value.into())
    }

    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, ServiceError>,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                state,
                action_description,
            )),
        }
    }
}

impl<T: Serialize> IntoResponse for OkOrErrorResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}

impl<T: ToSchema> utoipa::IntoResponses for OkOrErrorResponse<T> {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
        #[derive(utoipa::IntoResponses)]
        #[response(status = 200, description = "OK")]
        struct SuccessResponse<T: ToSchema>(#[to_schema] T);

        with_error_responses::<SuccessResponse<T>>()
    }
}

impl<T> From<ErrorResponse> for OkOrErrorResponse<T> {
    fn from(value: ErrorResponse) -> Self {
        Self::Error(value)
    }
}

/// Upstream status and body relayed as received.
pub(crate) enum PassthroughOrErrorResponse {
    Upstream(UpstreamResponse),
    Error(ErrorResponse),
}

impl PassthroughOrErrorResponse {
    #[track_caller]
    pub(crate) fn from_result(
        result: Result<UpstreamResponse, ServiceError>,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(response) => Self::Upstream(response),
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                state,
                action_description,
            )),
        }
    }
}

impl IntoResponse for PassthroughOrErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Upstream(UpstreamResponse { status, body }) => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, Json(body)).into_response()
            }
            Self::Error(error) => error.into_response(),
        }
    }
}

impl utoipa::IntoResponses for PassthroughOrErrorResponse {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
        #[derive(utoipa::IntoResponses)]
        #[response(
            status = "default",
            description = "Status and body of the wallet pass service"
        )]
        struct SuccessResponse;

        with_error_responses::<SuccessResponse>()
    }
}

impl From<ErrorResponse> for PassthroughOrErrorResponse {
    fn from(value: ErrorResponse) -> Self {
        Self::Error(value)
    }
}
