//! Shared Error Types
//!
//! Errors raised while validating client payloads. They carry the offending
//! field so the backend can report it back in a 400 response.
//!
//! # Usage
//!
//! ```rust
//! use character_favorites::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Email is required");
//! assert_eq!(error.to_string(), "Validation error in field 'email': Email is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur while handling client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Require a present, non-blank string field.
    ///
    /// The value is returned exactly as sent; only blankness is checked.
    pub fn require(field: &str, value: Option<String>) -> Result<String, Self> {
        match value {
            Some(value) if !value.trim().is_empty() => Ok(value),
            Some(_) => Err(Self::validation(field, format!("{field} must not be empty"))),
            None => Err(Self::validation(field, format!("{field} is required"))),
        }
    }
}
