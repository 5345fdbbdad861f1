//! Persistence module
//!
//! PostgreSQL-backed storage for users.

pub mod database;
pub mod user_store;

pub use database::{Database, DatabaseError};
pub use user_store::PgUserStore;
