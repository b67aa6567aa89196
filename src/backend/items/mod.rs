//! Todo Items Module
//!
//! Items belong to a list through a `lists_items` row; access to an item is
//! resolved through its list's owner.
//!
//! - **`db`** - PostgreSQL repository
//! - **`service`** - Ownership checks, deadline rules and pagination
//! - **`handlers`** - HTTP handlers under `/api/lists/{list_id}/items` and `/api/items`

/// PostgreSQL item repository
pub mod db;

/// Item business rules
pub mod service;

/// HTTP handlers for item endpoints
pub mod handlers;

pub use db::PgTodoItemRepository;
pub use handlers::{create_item, delete_item, get_all_items, get_item, update_item};
pub use service::TodoItemService;
