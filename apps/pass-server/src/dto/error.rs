use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use pass_core::model::completion::NotReadyReason;
use pass_core::service::error::{ErrorCode as CoreErrorCode, ServiceError};
use serde::Serialize;
use utoipa::ToSchema;

macro_rules! error_codes {
    ($($code:ident),* $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
        #[schema(example = "BR_XXXX")]
        #[allow(non_camel_case_types)]
        pub enum ErrorCode {
            $($code,)*
            BR_0084,
        }

        impl From<CoreErrorCode> for ErrorCode {
            fn from(value: CoreErrorCode) -> Self {
                match value {
                    $(CoreErrorCode::$code => ErrorCode::$code,)*
                }
            }
        }
    };
}

error_codes!(
    BR_0000, BR_0001, BR_0003, BR_0004, BR_0005, BR_0006, BR_0010, BR_0020, BR_0021,
    BR_0022, BR_0023, BR_0024, BR_0030, BR_0031, BR_0032, BR_0040, BR_0041, BR_0050, BR_0051,
    BR_0052,
);

/// Why a relay read came back empty.
#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotReadyReasonRestEnum {
    Pending,
    Delivered,
    Expired,
}

impl From<NotReadyReason> for NotReadyReasonRestEnum {
    fn from(value: NotReadyReason) -> Self {
        match value {
            NotReadyReason::Pending => Self::Pending,
            NotReadyReason::Delivered => Self::Delivered,
            NotReadyReason::Expired => Self::Expired,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    pub error: String,
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NotReadyReasonRestEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

impl ErrorResponseRestDTO {
    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.cause = None;
        }

        self
    }

    pub(crate) fn input_validation(cause: String) -> Self {
        Self {
            error: "General input validation error".to_string(),
            code: ErrorCode::BR_0084,
            status: None,
            cause: Some(Cause { message: cause }),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Cause {
    pub message: String,
}

impl From<&ServiceError> for ErrorResponseRestDTO {
    fn from(error: &ServiceError) -> Self {
        let status = match error {
            ServiceError::NotFound(not_found) => Some(not_found.reason.into()),
            _ => None,
        };

        Self {
            error: error.to_string(),
            code: error.error_code().into(),
            status,
            cause: std::error::Error::source(error).map(|source| Cause {
                message: source.to_string(),
            }),
        }
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

// For Qs
impl From<(StatusCode, String)> for ErrorResponseRestDTO {
    fn from(value: (StatusCode, String)) -> Self {
        Self::input_validation(value.1)
    }
}

impl From<JsonRejection> for ErrorResponseRestDTO {
    fn from(value: JsonRejection) -> Self {
        Self::input_validation(value.body_text())
    }
}
