//! Shared Error Types
//!
//! This module defines the error raised when a request payload fails one of the
//! field rules attached to the shared DTOs (minimum lengths, registration
//! formats, deadlines). The backend maps it onto a client-fault response.
//!
//! # Usage
//!
//! ```rust
//! use todo_app::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "title length is too short");
//! assert_eq!(error.message(), "title length is too short");
//! ```
use thiserror::Error;

/// Validation failures raised by shared request types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field of a request payload broke one of its rules
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A partial update carried no fields at all
    #[error("there is no values to update")]
    EmptyPatch,
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message shown to the client, without the field prefix
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message, .. } => message.clone(),
            Self::EmptyPatch => self.to_string(),
        }
    }
}
