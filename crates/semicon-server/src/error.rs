//! Mapping of library errors onto HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use semicon_types::error::SemiconError;

/// Error that can be returned from Axum handlers.
///
/// Renders as `{"kind": ..., "error": ...}` with a non-2xx status.
#[derive(Debug)]
pub struct ApiError(pub SemiconError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SemiconError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            SemiconError::NotFound { .. } => StatusCode::NOT_FOUND,
            SemiconError::UndefinedMath(_) | SemiconError::Overflow(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            SemiconError::ConfigError(_) | SemiconError::Io(_) | SemiconError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.0.kind(), "{}", self.0);
        } else {
            tracing::debug!(kind = self.0.kind(), status = status.as_u16(), "{}", self.0);
        }
        let body = serde_json::json!({
            "kind": self.0.kind(),
            "error": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

impl From<SemiconError> for ApiError {
    fn from(err: SemiconError) -> Self {
        ApiError(err)
    }
}

/// Malformed bodies and wrongly typed fields are parameter errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(SemiconError::InvalidParameter(rejection.body_text()))
    }
}
