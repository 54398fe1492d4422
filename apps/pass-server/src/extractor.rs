use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde_qs::Config;

/// Query string extractor, an absent query deserializes like an empty one.
pub struct Qs<T>(pub T);

impl<S, T> FromRequestParts<S> for Qs<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        Ok(Self(
            Config::new(0, false)
                .deserialize_bytes(query.as_bytes())
                .map_err(|e| {
                    (
                        StatusCode::BAD_REQUEST,
                        format!("Query extraction error: {e}"),
                    )
                })?,
        ))
    }
}
