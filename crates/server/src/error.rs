//! Error handling with JSON `detail` bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use seoscope_core::SeoscopeError;
use serde::Serialize;

pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Request timed out: {0}")]
    RequestTimeout(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RequestTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SeoscopeError> for AppError {
    fn from(err: SeoscopeError) -> Self {
        match err {
            SeoscopeError::Timeout { .. } => AppError::RequestTimeout(err.to_string()),
            SeoscopeError::InvalidUrl(_) => AppError::BadRequest(err.to_string()),
            _ => AppError::Internal(err.to_string()),
        }
    }
}

/// Error body returned for every handler-level failure.
#[derive(Serialize)]
pub struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse { detail: self.to_string() };
        (status, Json(body)).into_response()
    }
}
