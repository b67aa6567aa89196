/**
 * Ownership Index
 *
 * The two join relations that decide who may touch what:
 *
 * - `users_lists`: exactly one row per list, naming its owner
 * - `lists_items`: exactly one row per item, naming its list
 *
 * Rows are never updated; they disappear only when the resource they point at
 * is deleted. Every list and item query joins through these tables, and the
 * predicates below expose the same checks to the services.
 */

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::repository::StoreError;

/// Ownership row: user `user_id` owns list `list_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct UserList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub list_id: Uuid,
}

/// Membership row: list `list_id` contains item `item_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct ListItem {
    pub id: Uuid,
    pub list_id: Uuid,
    pub item_id: Uuid,
}

/// Server-side ownership predicates
#[async_trait]
pub trait OwnershipIndex: Send + Sync {
    /// Whether `user_id` owns `list_id`
    async fn owns_list(&self, user_id: Uuid, list_id: Uuid) -> Result<bool, StoreError>;

    /// Whether `item_id` sits in a list owned by `user_id`
    async fn owns_item(&self, user_id: Uuid, item_id: Uuid) -> Result<bool, StoreError>;
}

pub(crate) const OWNS_LIST_QUERY: &str = r#"
    SELECT EXISTS (
        SELECT 1 FROM users_lists
        WHERE user_id = $1 AND list_id = $2
    )
"#;

const OWNS_ITEM_QUERY: &str = r#"
    SELECT EXISTS (
        SELECT 1
        FROM lists_items li
        INNER JOIN users_lists ul ON ul.list_id = li.list_id
        WHERE ul.user_id = $1 AND li.item_id = $2
    )
"#;

/// PostgreSQL ownership index
#[derive(Debug, Clone)]
pub struct PgOwnershipIndex {
    pool: PgPool,
}

impl PgOwnershipIndex {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnershipIndex for PgOwnershipIndex {
    async fn owns_list(&self, user_id: Uuid, list_id: Uuid) -> Result<bool, StoreError> {
        let owned = sqlx::query_scalar::<_, bool>(OWNS_LIST_QUERY)
            .bind(user_id)
            .bind(list_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(owned)
    }

    async fn owns_item(&self, user_id: Uuid, item_id: Uuid) -> Result<bool, StoreError> {
        let owned = sqlx::query_scalar::<_, bool>(OWNS_ITEM_QUERY)
            .bind(user_id)
            .bind(item_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(owned)
    }
}
