//! Route definitions

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::services::ServeDir;

use crate::{handlers, middleware::HitCountLayer, state::AppState};

/// Create the main router with all routes
///
/// Everything under `/app` is served from the configured static root with
/// the prefix stripped; each of those requests bumps the visit counter.
pub fn create_router(state: AppState) -> Router {
    let static_files = HitCountLayer::new(Arc::clone(&state.hits))
        .layer(ServeDir::new(&state.config.server.static_root));

    Router::new()
        // Health
        .route("/api/healthz", get(handlers::health::healthz))
        // Admin surface
        .route("/admin/metrics", get(handlers::metrics::admin_metrics))
        .route("/admin/reset", post(handlers::reset::reset))
        // Chirp API
        .route("/api/validate_chirp", post(handlers::chirps::validate_chirp))
        // User API
        .route("/api/users", post(handlers::users::create_user))
        // Static assets
        .nest_service("/app", static_files)
        // Attach state
        .with_state(state)
}
