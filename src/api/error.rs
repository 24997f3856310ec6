//! API-level errors (wraps application errors)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::warn;

use crate::api::models::ErrorDto;
use crate::application::ApplicationError;

/// Errors returned by HTTP handlers, rendered as `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Application(e) => match e {
                ApplicationError::DeckNotFound(_) | ApplicationError::CardNotFound { .. } => {
                    StatusCode::NOT_FOUND
                }
                ApplicationError::InvalidCardCode(_)
                | ApplicationError::InvalidAmount(_)
                | ApplicationError::NotEnoughCards { .. } => StatusCode::BAD_REQUEST,
                ApplicationError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("request failed: {}", self);
        }
        let body = ErrorDto {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
