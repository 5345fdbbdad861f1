//! Chirp validation endpoint

use axum::{Json, extract::rejection::JsonRejection};
use domain::ChirpBody;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Request payload for chirp validation
#[derive(Debug, Deserialize)]
pub struct ValidateChirpRequest {
    /// The chirp text to validate
    pub body: String,
}

/// Successful validation result
#[derive(Debug, Serialize)]
pub struct ValidateChirpResponse {
    /// Always true on the success path
    pub valid: bool,
    /// Body with banned words masked and whitespace runs collapsed
    pub cleaned_body: String,
}

/// Validate a chirp and return its cleaned body
pub async fn validate_chirp(
    payload: Result<Json<ValidateChirpRequest>, JsonRejection>,
) -> Result<Json<ValidateChirpResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        debug!(error = %e, "chirp payload rejected");
        ApiError::MalformedRequest
    })?;

    let chirp = ChirpBody::new(request.body)?;
    Ok(Json(ValidateChirpResponse {
        valid: true,
        cleaned_body: chirp.cleaned(),
    }))
}
