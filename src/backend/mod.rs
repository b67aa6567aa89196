//! Backend Module
//!
//! This module contains all server-side code for the todo service: an Axum
//! HTTP server with stateless token authentication and ownership-scoped
//! access to lists and items.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, JWT tokens, user management
//! - **`middleware`** - The authorization gate
//! - **`ownership`** - The ownership index over `users_lists` and `lists_items`
//! - **`repository`** - Store traits, PostgreSQL wiring and the in-memory store
//! - **`lists`** - Todo list service and handlers
//! - **`items`** - Todo item service and handlers
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Authorization gate
//! ├── ownership.rs    - Ownership index
//! ├── repository/     - Store traits and implementations
//! ├── lists/          - Todo lists
//! ├── items/          - Todo items
//! └── error/          - Error types
//! ```
//!
//! # Access Model
//!
//! A user owns the lists linked to them in `users_lists`, and the items linked
//! to those lists in `lists_items`. Every read, update and delete of a list or
//! item is a qualified query that joins through these tables on the caller's
//! ID, so a foreign resource is indistinguishable from a missing one.
//!
//! # State Management
//!
//! `AppState` holds the three services, the token manager and the optional
//! database pool. All of it is immutable after startup and cheap to clone.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` maps onto an HTTP
//! status and a `{"error", "status"}` JSON body; internal failures are logged
//! and answered with a generic message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Ownership join tables
pub mod ownership;

/// Store traits and implementations
pub mod repository;

/// Todo lists
pub mod lists;

/// Todo items
pub mod items;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{build_state, create_app, AppState};
