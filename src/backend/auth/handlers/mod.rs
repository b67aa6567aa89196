//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`sign_up`** - POST /auth/sign-up - User registration
//! - **`sign_in`** - POST /auth/sign-in - Token issuance
//! - **`get_me`** - GET /api/me - Current user info (behind the gate)

/// Request and response types
pub mod types;

/// Sign up handler
pub mod signup;

/// Sign in handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{SignInRequest, TokenResponse, UserResponse};

// Re-export handlers
pub use login::sign_in;
pub use me::get_me;
pub use signup::sign_up;
