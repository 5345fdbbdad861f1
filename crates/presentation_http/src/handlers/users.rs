//! User creation endpoint

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use domain::{User, UserId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::ApiError, state::AppState};

/// Request payload for user creation
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Email address; stored as supplied
    pub email: String,
}

/// A user as it appears on the wire
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
            email: user.email().to_string(),
        }
    }
}

/// Create a user record
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(request) = payload.map_err(|e| {
        debug!(error = %e, "user payload rejected");
        ApiError::MalformedRequest
    })?;

    let user = state.users.register(&request.email).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}
