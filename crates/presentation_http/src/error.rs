//! API error handling
//!
//! Maps application failures onto the wire contract. Client mistakes get
//! a JSON error body; forbidden and server-side failures are bodyless,
//! with the detail recorded in the logs only.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed to parse as the expected JSON shape
    #[error("invalid request body")]
    MalformedRequest,

    /// Chirp body exceeds the length limit
    #[error("chirp is too long")]
    ChirpTooLong,

    /// Operation not available on this platform
    #[error("forbidden")]
    Forbidden,

    /// Store operation failed
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// Anything else
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body for client mistakes
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedRequest => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid request body".to_string(),
                }),
            )
                .into_response(),
            Self::ChirpTooLong => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Chirp is too long".to_string(),
                }),
            )
                .into_response(),
            Self::Forbidden => StatusCode::FORBIDDEN.into_response(),
            Self::Persistence(detail) => {
                error!(%detail, "persistence failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            },
            Self::Internal(detail) => {
                error!(%detail, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            },
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ChirpTooLong { .. } => Self::ChirpTooLong,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => e.into(),
            ApplicationError::Persistence(msg) => Self::Persistence(msg),
            ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
