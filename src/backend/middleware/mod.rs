//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Authorization gate for the `/api` routes and the `AuthUser` extractor
//!
//! # Example
//!
//! ```rust,no_run
//! use todo_app::backend::middleware::auth_middleware;
//!
//! // let protected = router.route_layer(
//! //     axum::middleware::from_fn_with_state(state, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authorize, AuthUser, AuthenticatedUser};
