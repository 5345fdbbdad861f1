//! Chirpy HTTP presentation layer
//!
//! This crate provides the HTTP API for Chirpy.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use handlers::metrics::HitCounter;
pub use middleware::HitCountLayer;
pub use routes::create_router;
pub use state::AppState;
