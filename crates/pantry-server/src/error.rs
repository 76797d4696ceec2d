//! HTTP error mapping.
//!
//! Every failure leaves the server as `{"error": "...", "status": n}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pantry_core::errors::CoreError;
use pantry_core::responses::ErrorBody;
use pantry_db::error::DatabaseError;
use pantry_yummly::{UPSTREAM_FAILURE, YummlyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Yummly(#[from] YummlyError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Core(err) => match err {
                CoreError::InvalidViewer(_) => (StatusCode::UNAUTHORIZED, err.to_string()),
                CoreError::AlreadyLiked { .. }
                | CoreError::NotLiked { .. }
                | CoreError::AlreadyFollowing { .. }
                | CoreError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
                CoreError::Forbidden(_) => (StatusCode::FORBIDDEN, err.to_string()),
                CoreError::Storage(_) => internal(),
            },
            Self::Database(DatabaseError::NoResult) => {
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            Self::Database(_) => internal(),
            Self::Yummly(err) => (
                StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                UPSTREAM_FAILURE.to_string(),
            ),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        }
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = Json(ErrorBody {
            error,
            status: status.as_u16(),
        });
        (status, body).into_response()
    }
}
