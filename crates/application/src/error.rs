//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Persistence error from a store adapter
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}
