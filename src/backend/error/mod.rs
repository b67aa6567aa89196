//! Backend Error Module
//!
//! This module defines the error type returned by every handler, service and
//! middleware in the backend, and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status/message mapping
//! └── conversion.rs - IntoResponse and extractor rejection conversions
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use todo_app::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::not_found("todo list not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, INTERNAL_ERROR_MESSAGE};
