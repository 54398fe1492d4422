use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::build_info;
use crate::metrics::encode_metrics;

#[utoipa::path(
    get,
    path = "/build-info",
    responses(
        (status = 200, description = "Ok")
    ),
    tag = "other",
    summary = "Retrieve version",
    description = "Returns version information for the pass server.",
)]
pub(crate) async fn get_build_info() -> Json<Value> {
    Json::from(json!({
        "name": build_info::PKG_NAME,
        "version": build_info::PKG_VERSION,
        "rust_edition": build_info::RUST_EDITION,
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 204, description = "No content")
    ),
    tag = "other",
    summary = "Health check",
    description = "Returns a `204` response when the system is healthy.",
)]
pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "OK"),
        (status = 500, description = "Internal error")
    ),
    tag = "other",
    summary = "Retrieve metrics",
    description = "Returns system metrics.",
)]
pub(crate) async fn get_metrics() -> Response {
    match encode_metrics() {
        Ok(result) => (StatusCode::OK, result).into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Metrics encoding error: {error:?}"),
        )
            .into_response(),
    }
}
