//! Authentication Module
//!
//! This module handles user registration, sign-in and session tokens.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - JWT issuance and verification
//! - **`users`** - PostgreSQL credential store
//! - **`service`** - Registration and sign-in rules
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - PasswordHasher
//! ├── sessions.rs     - TokenManager, Claims, TokenError
//! ├── users.rs        - PgUserRepository
//! ├── service.rs      - UserService
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign up**: email, username, password → validated, hashed, stored → user ID returned
//! 2. **Sign in**: email, password → hash verified → JWT token returned
//! 3. **Later calls**: `Authorization: Bearer <token>` → gate verifies → user ID bound to the request
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication; logout is client-side
//! - Tokens expire after the configured lifetime (24 hours by default)
//! - Invalid credentials return 401 (no information leakage)

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User database operations
pub mod users;

/// Registration and sign-in
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, sign_in, sign_up};
pub use password::PasswordHasher;
pub use service::UserService;
pub use sessions::{Claims, TokenError, TokenManager};
