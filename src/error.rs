//! Client-side validation errors for the Tactill SDK.
//!
//! Every validated newtype and every creation/modification constructor that
//! checks its input returns `Result<T, ValidationError>`. Validation happens
//! before any network call, so a malformed identifier never reaches the API.
//!
//! # Example
//!
//! ```rust
//! use tactill::{TactillId, ValidationError};
//!
//! let result = TactillId::new("not-an-id");
//! assert!(matches!(result, Err(ValidationError::InvalidId { .. })));
//! ```

use thiserror::Error;

/// Errors raised when a value violates a declared field constraint.
///
/// Field-aware variants carry the path of the offending field (for example
/// `taxes[1]` or `category_id`) so callers can report exactly what to fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a 24 character hexadecimal identifier.
    #[error("Invalid identifier '{value}'. Expected 24 hexadecimal characters.")]
    InvalidId {
        /// The rejected value.
        value: String,
    },

    /// The API key does not match the identifier pattern.
    #[error("Invalid API key. Expected 24 hexadecimal characters.")]
    InvalidApiKey,

    /// A field of a creation or modification payload is invalid.
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField {
        /// Path of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The base URL cannot be used to reach the API.
    #[error("Invalid base URL '{url}'. Expected an http:// or https:// URL.")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
    },

    /// A required configuration field was never set.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

impl ValidationError {
    /// Re-labels an error with the field path it was raised for.
    ///
    /// Identifier errors become [`ValidationError::InvalidField`] so the
    /// caller learns which field carried the malformed value.
    #[must_use]
    pub fn at(self, field: impl Into<String>) -> Self {
        match self {
            Self::InvalidField { .. } | Self::MissingRequiredField { .. } => self,
            other => Self::InvalidField {
                field: field.into(),
                reason: other.to_string(),
            },
        }
    }
}
