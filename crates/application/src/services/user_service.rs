//! User registration and administration

use std::{fmt, sync::Arc};

use domain::User;
use tracing::{debug, info};

use crate::{error::ApplicationError, ports::UserStore};

/// Service for creating and bulk-deleting users
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl fmt::Debug for UserService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

impl UserService {
    /// Create a new user service over a store
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Register a user for the given email address
    ///
    /// The email is stored as supplied; format validation is out of scope
    /// for this service.
    pub async fn register(&self, email: &str) -> Result<User, ApplicationError> {
        let user = self.store.create_user(email).await?;
        debug!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    /// Remove every user record
    ///
    /// Destructive; callers are responsible for gating access.
    pub async fn remove_all(&self) -> Result<(), ApplicationError> {
        self.store.delete_all_users().await?;
        info!("all users removed");
        Ok(())
    }
}
