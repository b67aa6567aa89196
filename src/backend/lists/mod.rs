//! Todo Lists Module
//!
//! Lists are owned by exactly one user through a `users_lists` row written in
//! the same transaction as the list itself.
//!
//! - **`db`** - PostgreSQL repository
//! - **`service`** - Ownership-scoped list rules (per-user cap, patch validation)
//! - **`handlers`** - HTTP handlers under `/api/lists`

/// PostgreSQL list repository
pub mod db;

/// List business rules
pub mod service;

/// HTTP handlers for list endpoints
pub mod handlers;

pub use db::PgTodoListRepository;
pub use handlers::{create_list, delete_list, get_all_lists, get_list, update_list};
pub use service::TodoListService;
