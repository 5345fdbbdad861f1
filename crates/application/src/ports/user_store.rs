//! User persistence port

use async_trait::async_trait;
use domain::User;

use crate::error::ApplicationError;

/// Persistence boundary for user records
///
/// The service issues at most one store operation per request and never
/// retries; concurrency control is the implementation's concern.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user row and return the stored record
    async fn create_user(&self, email: &str) -> Result<User, ApplicationError>;

    /// Remove every user row
    async fn delete_all_users(&self) -> Result<(), ApplicationError>;
}
