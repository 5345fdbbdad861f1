//! Domain-level errors

use thiserror::Error;

use crate::value_objects::MAX_CHIRP_LENGTH;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Chirp body exceeds the maximum length
    #[error("chirp is {length} bytes, limit is {MAX_CHIRP_LENGTH}")]
    ChirpTooLong { length: usize },
}
