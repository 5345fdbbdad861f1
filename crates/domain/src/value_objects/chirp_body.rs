//! Chirp body value object with length validation and word censoring
//!
//! A chirp is a short text post. Construction enforces the length limit;
//! [`ChirpBody::cleaned`] produces the publishable form with banned words
//! masked out.
//!
//! # Examples
//!
//! ```
//! use domain::ChirpBody;
//!
//! let chirp = ChirpBody::new("what a kerfuffle this is").unwrap();
//! assert_eq!(chirp.cleaned(), "what a **** this is");
//!
//! // Bodies over 140 bytes are rejected
//! assert!(ChirpBody::new("x".repeat(141)).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Maximum chirp length, measured in bytes as received
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Replacement token for censored words
pub const MASK: &str = "****";

/// Words that are masked out of published chirps
const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// A chirp body that satisfies the length limit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChirpBody {
    value: String,
}

impl ChirpBody {
    /// Create a chirp body, enforcing the length limit
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ChirpTooLong`] when the body exceeds
    /// [`MAX_CHIRP_LENGTH`] bytes.
    pub fn new(body: impl Into<String>) -> Result<Self, DomainError> {
        let value = body.into();
        if value.len() > MAX_CHIRP_LENGTH {
            return Err(DomainError::ChirpTooLong {
                length: value.len(),
            });
        }
        Ok(Self { value })
    }

    /// Get the raw body as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Produce the publishable body with banned words masked
    ///
    /// Tokens are compared case-insensitively against the banned set and
    /// replaced whole; a banned word embedded in a longer token is left
    /// alone. Runs of whitespace collapse to single spaces in the output —
    /// only word order is preserved, not the original spacing.
    pub fn cleaned(&self) -> String {
        self.value
            .split_whitespace()
            .map(|word| if is_banned(word) { MASK } else { word })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn is_banned(word: &str) -> bool {
    let lowered = word.to_lowercase();
    BANNED_WORDS.iter().any(|banned| lowered == *banned)
}

impl fmt::Display for ChirpBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for ChirpBody {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
