//! PostgreSQL user store implementation
//!
//! Implements the `UserStore` port. Store failures are logged here and
//! surface to callers as `ApplicationError::Persistence` with no further
//! detail attached.

use application::{error::ApplicationError, ports::UserStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{User, UserId};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use super::database::Database;

/// PostgreSQL-backed user store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a store over an open database
    pub fn new(database: &Database) -> Self {
        Self {
            pool: database.pool().clone(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::restore(
            UserId::from_uuid(row.id),
            row.created_at,
            row.updated_at,
            row.email,
        )
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self))]
    async fn create_user(&self, email: &str) -> Result<User, ApplicationError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row: UserRow = sqlx::query_as(
            "INSERT INTO users (id, created_at, updated_at, email)
             VALUES ($1, $2, $2, $3)
             RETURNING id, created_at, updated_at, email",
        )
        .bind(id)
        .bind(now)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "user insert failed");
            ApplicationError::Persistence(e.to_string())
        })?;

        debug!(user_id = %row.id, "user row inserted");
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn delete_all_users(&self) -> Result<(), ApplicationError> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "bulk user delete failed");
                ApplicationError::Persistence(e.to_string())
            })?;

        debug!(rows = result.rows_affected(), "users table cleared");
        Ok(())
    }
}
