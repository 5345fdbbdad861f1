//! Application state shared across handlers

use std::sync::Arc;

use application::UserService;
use infrastructure::AppConfig;

use crate::handlers::metrics::HitCounter;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// User registration and administration service
    pub users: Arc<UserService>,
    /// Static asset visit counter
    pub hits: Arc<HitCounter>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
