//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, gate placement and tower layers
//! - **`api_routes`** - Public authentication routes and gated `/api` routes
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Route tables
//! ```
//!
//! # Route Types
//!
//! ## Public Routes
//!
//! - `POST /auth/sign-up` - User registration
//! - `POST /auth/sign-in` - Session token issuance
//!
//! ## Gated Routes
//!
//! Every `/api` route runs behind the authorization gate:
//!
//! - `GET /api/me` - Current user
//! - `POST|GET /api/lists` - Create / list
//! - `GET|PATCH|DELETE /api/lists/{list_id}` - Single list
//! - `POST|GET /api/lists/{list_id}/items` - Create / page through items
//! - `GET|PATCH|DELETE /api/items/{item_id}` - Single item
//!
//! # Example
//!
//! ```rust,no_run
//! use todo_app::backend::routes::create_router;
//! use todo_app::backend::repository::Repositories;
//! use todo_app::backend::server::build_state;
//! use todo_app::shared::config::AppConfig;
//!
//! # fn example(config: AppConfig) -> Result<(), todo_app::shared::config::ConfigError> {
//! let state = build_state(&config, Repositories::in_memory())?;
//! let router = create_router(state);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Route tables
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
