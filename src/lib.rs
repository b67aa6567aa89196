//! Todo App - Main Library
//!
//! A multi-tenant todo service: users register, sign in for a session token,
//! and manage lists and items that only they can see.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the HTTP layer
//!   - Users, lists, items and their request payloads
//!   - Sorting and pagination modifiers
//!   - Configuration and validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and the authorization gate
//!   - bcrypt password hashing and JWT sessions
//!   - PostgreSQL and in-memory stores behind the ownership index
//!
//! # Usage
//!
//! ```rust,no_run
//! use todo_app::backend::server::config::load_config;
//! use todo_app::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(&config).await?;
//! // Use app with Axum server
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for input validation
//! - `shared::config::ConfigError` for startup configuration
//! - `backend::error::BackendError` for everything that reaches HTTP

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
