//! User entity
//!
//! A registered account. Users are immutable after creation; the only
//! lifecycle event besides creation is the bulk delete issued by the dev
//! reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    id: UserId,
    /// When the account was created
    created_at: DateTime<Utc>,
    /// When the account was last updated
    updated_at: DateTime<Utc>,
    /// Email address as supplied by the caller
    email: String,
}

impl User {
    /// Create a new user with a fresh id and matching timestamps
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            created_at: now,
            updated_at: now,
            email: email.into(),
        }
    }

    /// Rebuild a user from stored fields
    pub const fn restore(
        id: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        email: String,
    ) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            email,
        }
    }

    /// Get the user id
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Get the creation timestamp
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the last-update timestamp
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Get the email address
    pub fn email(&self) -> &str {
        &self.email
    }
}
