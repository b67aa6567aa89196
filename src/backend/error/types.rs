/**
 * Backend Error Types
 *
 * This module defines the error returned by services, extractors and the
 * authorization gate. Every variant carries one human-readable message and
 * maps onto a single HTTP status.
 *
 * # Error Categories
 *
 * - `Validation` / `SharedError` - client sent something that breaks a rule (400)
 * - `Unauthorized` - missing, malformed or expired credentials (401)
 * - `Forbidden` - acting on a list the caller does not own (403)
 * - `NotFound` - absent or not owned, indistinguishably (404)
 * - `Conflict` - duplicate email or username (409)
 * - `Internal` / `Store` / `Hash` - everything else (500, detail only logged)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::HashError;
use crate::backend::repository::StoreError;
use crate::shared::SharedError;

/// Generic message sent for any internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use todo_app::backend::error::BackendError;
///
/// let err = BackendError::not_found("todo list not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request payload or parameters are invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credentials missing, malformed or expired
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Caller may not act on the target resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource absent or not owned by the caller
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique value already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected failure; the detail is logged, never sent
    #[error("Internal error: {0}")]
    Internal(String),

    /// Shared validation error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Password hashing failure
    #[error(transparent)]
    Hash(#[from] HashError),
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `SharedError`, `Store(ListLimitExceeded)` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Conflict`, `Store(UniqueViolation)` - 409 Conflict
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::SharedError(_)
            | Self::Store(StoreError::ListLimitExceeded) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Store(StoreError::UniqueViolation { .. }) => StatusCode::CONFLICT,
            Self::Internal(_) | Self::Store(_) | Self::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message sent to the client
    ///
    /// Internal failures always read `"internal server error"`.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message) => message.clone(),
            Self::SharedError(err) => err.message(),
            Self::Store(err @ (StoreError::UniqueViolation { .. } | StoreError::ListLimitExceeded)) => {
                err.to_string()
            }
            Self::Internal(_) | Self::Store(_) | Self::Hash(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Whether the detail must stay in the logs
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }
}
