//! Administrative reset endpoint

use axum::extract::State;
use tracing::{info, warn};

use crate::{error::ApiError, state::AppState};

/// Clear the users table and zero the visit counter
///
/// Destructive, so it is only available when the platform is exactly
/// `dev`; everywhere else the request is refused before touching the
/// store. The counter is reset only after the delete succeeds.
pub async fn reset(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    if !state.config.dev_platform() {
        warn!(platform = %state.config.platform, "reset refused outside dev");
        return Err(ApiError::Forbidden);
    }

    state.users.remove_all().await?;
    state.hits.reset();

    info!("users and visit counter reset");
    Ok("Counter reset to 0")
}
