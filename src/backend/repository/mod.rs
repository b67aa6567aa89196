//! Repository Module
//!
//! Persistence seams for users, lists and items. Every list and item
//! operation takes the caller's user id and is qualified through the ownership
//! join tables, so a resource owned by someone else behaves exactly like one
//! that does not exist.
//!
//! # Implementations
//!
//! - PostgreSQL: `auth::users`, `lists::db`, `items::db` and `ownership`
//! - In-memory: [`memory::MemoryStore`], used by tests and when no database is
//!   configured
//!
//! # Module Structure
//!
//! ```text
//! repository/
//! ├── mod.rs     - Traits, StoreError and the Repositories bundle
//! └── memory.rs  - In-memory implementation of every trait
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::PgUserRepository;
use crate::backend::items::db::PgTodoItemRepository;
use crate::backend::lists::db::PgTodoListRepository;
use crate::backend::ownership::{OwnershipIndex, PgOwnershipIndex};
use crate::shared::models::{
    CreateTodoListDto, ItemSortField, ListSortField, NewTodoItem, NewUser, Pagination,
    SortDirective, TodoItem, TodoList, UpdateTodoItemDto, UpdateTodoListDto, User,
};

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;

/// Unique constraint backing the email column
pub const USERS_EMAIL_CONSTRAINT: &str = "users_email_key";

/// Unique constraint backing the username column
pub const USERS_USERNAME_CONSTRAINT: &str = "users_username_key";

/// Errors raised by a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique column already holds the value
    #[error("{field} is already taken")]
    UniqueViolation { field: &'static str },

    /// The owner already holds the maximum number of lists
    #[error("exceeded the maximum allowed limit of existing lists")]
    ListLimitExceeded,

    /// The database rejected or failed the statement
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify an insert failure on the users table
    pub fn from_user_insert(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let field = match db_err.constraint() {
                    Some(USERS_USERNAME_CONSTRAINT) => "username",
                    _ => "email",
                };
                return Self::UniqueViolation { field };
            }
        }
        Self::Database(err)
    }
}

/// Credential store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user, failing with `UniqueViolation` on a taken email or username
    async fn create(&self, user: NewUser) -> Result<Uuid, StoreError>;

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}

/// Ownership-qualified list store
#[async_trait]
pub trait TodoListRepository: Send + Sync {
    /// Insert the list and its ownership row atomically
    ///
    /// Re-checks the per-user cap inside the same write and fails with
    /// `ListLimitExceeded` when the owner is already full.
    async fn create(&self, user_id: Uuid, list: CreateTodoListDto) -> Result<Uuid, StoreError>;

    /// Number of lists owned by the user
    async fn count(&self, user_id: Uuid) -> Result<i64, StoreError>;

    async fn get_all(
        &self,
        user_id: Uuid,
        sort: Option<SortDirective<ListSortField>>,
    ) -> Result<Vec<TodoList>, StoreError>;

    async fn get_by_id(&self, user_id: Uuid, list_id: Uuid)
        -> Result<Option<TodoList>, StoreError>;

    /// Merge the patch into an owned list; `false` when nothing matched
    async fn update(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        patch: UpdateTodoListDto,
    ) -> Result<bool, StoreError>;

    /// Delete an owned list together with its items; `false` when nothing matched
    async fn delete(&self, user_id: Uuid, list_id: Uuid) -> Result<bool, StoreError>;
}

/// Ownership-qualified item store
#[async_trait]
pub trait TodoItemRepository: Send + Sync {
    /// Insert the item and its list membership row atomically
    ///
    /// Returns `None` without writing anything when the user does not own the
    /// list at the time of the insert.
    async fn create(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        item: NewTodoItem,
    ) -> Result<Option<Uuid>, StoreError>;

    async fn get_all(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        pagination: Pagination,
        sort: Option<SortDirective<ItemSortField>>,
    ) -> Result<Vec<TodoItem>, StoreError>;

    async fn get_by_id(&self, user_id: Uuid, item_id: Uuid)
        -> Result<Option<TodoItem>, StoreError>;

    async fn update(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        patch: UpdateTodoItemDto,
    ) -> Result<bool, StoreError>;

    async fn delete(&self, user_id: Uuid, item_id: Uuid) -> Result<bool, StoreError>;
}

/// Every store the services need, behind trait objects
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub lists: Arc<dyn TodoListRepository>,
    pub items: Arc<dyn TodoItemRepository>,
    pub ownership: Arc<dyn OwnershipIndex>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            lists: Arc::new(PgTodoListRepository::new(pool.clone())),
            items: Arc::new(PgTodoItemRepository::new(pool.clone())),
            ownership: Arc::new(PgOwnershipIndex::new(pool)),
        }
    }

    /// Repositories backed by a single fresh [`MemoryStore`]
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            lists: store.clone(),
            items: store.clone(),
            ownership: store,
        }
    }
}
