//! Database operations for todo items
//!
//! Items are reached through `lists_items` and then `users_lists`, so every
//! statement is qualified by the caller's id.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::ownership::OWNS_LIST_QUERY;
use crate::backend::repository::{StoreError, TodoItemRepository};
use crate::shared::models::{
    ItemSortField, NewTodoItem, Pagination, SortDirective, TodoItem, UpdateTodoItemDto,
};

/// PostgreSQL-backed [`TodoItemRepository`]
#[derive(Debug, Clone)]
pub struct PgTodoItemRepository {
    pool: PgPool,
}

impl PgTodoItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn order_by(sort: Option<SortDirective<ItemSortField>>) -> String {
    match sort {
        Some(directive) => format!("ti.{}", directive.order_by_clause()),
        None => "ti.created_at ASC".to_string(),
    }
}

#[async_trait]
impl TodoItemRepository for PgTodoItemRepository {
    async fn create(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        item: NewTodoItem,
    ) -> Result<Option<Uuid>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let owned = sqlx::query_scalar::<_, bool>(OWNS_LIST_QUERY)
            .bind(user_id)
            .bind(list_id)
            .fetch_one(&mut *tx)
            .await?;
        if !owned {
            // Dropping the transaction rolls it back
            return Ok(None);
        }

        let item_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO todo_items (id, title, description, created_at, deadline, completed)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            "#,
        )
        .bind(item_id)
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.created_at)
        .bind(item.deadline)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO lists_items (id, list_id, item_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(list_id)
        .bind(item_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(item_id))
    }

    async fn get_all(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        pagination: Pagination,
        sort: Option<SortDirective<ItemSortField>>,
    ) -> Result<Vec<TodoItem>, StoreError> {
        let query = format!(
            r#"
            SELECT ti.id, ti.title, ti.description, ti.created_at, ti.deadline, ti.completed
            FROM todo_items ti
            INNER JOIN lists_items li ON li.item_id = ti.id
            INNER JOIN users_lists ul ON ul.list_id = li.list_id
            WHERE ul.user_id = $1 AND li.list_id = $2
            ORDER BY {}
            LIMIT $3 OFFSET $4
            "#,
            order_by(sort)
        );

        let items = sqlx::query_as::<_, TodoItem>(&query)
            .bind(user_id)
            .bind(list_id)
            .bind(i64::from(pagination.limit))
            .bind(i64::try_from(pagination.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn get_by_id(
        &self,
        user_id: Uuid,
        item_id: Uuid,
    ) -> Result<Option<TodoItem>, StoreError> {
        let item = sqlx::query_as::<_, TodoItem>(
            r#"
            SELECT ti.id, ti.title, ti.description, ti.created_at, ti.deadline, ti.completed
            FROM todo_items ti
            INNER JOIN lists_items li ON li.item_id = ti.id
            INNER JOIN users_lists ul ON ul.list_id = li.list_id
            WHERE ul.user_id = $1 AND ti.id = $2
            "#,
        )
        .bind(user_id)
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn update(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        patch: UpdateTodoItemDto,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE todo_items ti
            SET title = COALESCE($1, ti.title),
                description = COALESCE($2, ti.description),
                deadline = COALESCE($3, ti.deadline),
                completed = COALESCE($4, ti.completed)
            FROM lists_items li, users_lists ul
            WHERE ti.id = li.item_id AND li.list_id = ul.list_id
              AND ul.user_id = $5 AND ti.id = $6
            "#,
        )
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.deadline)
        .bind(patch.completed)
        .bind(user_id)
        .bind(item_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, user_id: Uuid, item_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todo_items ti
            USING lists_items li, users_lists ul
            WHERE ti.id = li.item_id AND li.list_id = ul.list_id
              AND ul.user_id = $1 AND ti.id = $2
            "#,
        )
        .bind(user_id)
        .bind(item_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
