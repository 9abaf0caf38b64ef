use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::core::error::YunoError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Wraps the app error so every handler can `?` straight into an HTTP
/// response with the right status code and a JSON error body.
pub struct ApiError(pub YunoError);

impl From<YunoError> for ApiError {
    fn from(err: YunoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            YunoError::InvalidStage(_) | YunoError::Validation(_) => StatusCode::BAD_REQUEST,
            YunoError::Unauthorized => StatusCode::UNAUTHORIZED,
            YunoError::UnknownCollection(_) => StatusCode::NOT_FOUND,
            YunoError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = std::result::Result<Json<T>, ApiError>;
