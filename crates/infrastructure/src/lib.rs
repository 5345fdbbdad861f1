//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer and owns
//! process configuration and database plumbing.

pub mod config;
pub mod persistence;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use persistence::{Database, DatabaseError, PgUserStore};
