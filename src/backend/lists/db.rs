//! Database operations for todo lists
//!
//! Every statement joins through `users_lists` on the caller's id. Sort
//! columns come from the allow-listed [`SortDirective`] only, never from raw
//! input.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::repository::{StoreError, TodoListRepository};
use crate::shared::models::todo_list::MAX_LISTS_PER_USER;
use crate::shared::models::{
    CreateTodoListDto, ListSortField, SortDirective, TodoList, UpdateTodoListDto,
};

/// PostgreSQL-backed [`TodoListRepository`]
#[derive(Debug, Clone)]
pub struct PgTodoListRepository {
    pool: PgPool,
}

impl PgTodoListRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn order_by(sort: Option<SortDirective<ListSortField>>) -> String {
    match sort {
        Some(directive) => format!("tl.{}", directive.order_by_clause()),
        None => "tl.created_at ASC".to_string(),
    }
}

#[async_trait]
impl TodoListRepository for PgTodoListRepository {
    async fn create(&self, user_id: Uuid, list: CreateTodoListDto) -> Result<Uuid, StoreError> {
        let list_id = Uuid::new_v4();
        let mut tx = self.pool.begin().await?;

        // Serializes concurrent creates by the same owner until commit
        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let owned = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users_lists WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;
        if owned >= MAX_LISTS_PER_USER {
            return Err(StoreError::ListLimitExceeded);
        }

        sqlx::query(
            r#"
            INSERT INTO todo_lists (id, title, description, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(list_id)
        .bind(&list.title)
        .bind(&list.description)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO users_lists (id, user_id, list_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(list_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(list_id)
    }

    async fn count(&self, user_id: Uuid) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users_lists WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn get_all(
        &self,
        user_id: Uuid,
        sort: Option<SortDirective<ListSortField>>,
    ) -> Result<Vec<TodoList>, StoreError> {
        let query = format!(
            r#"
            SELECT tl.id, tl.title, tl.description, tl.created_at
            FROM todo_lists tl
            INNER JOIN users_lists ul ON ul.list_id = tl.id
            WHERE ul.user_id = $1
            ORDER BY {}
            "#,
            order_by(sort)
        );

        let lists = sqlx::query_as::<_, TodoList>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(lists)
    }

    async fn get_by_id(
        &self,
        user_id: Uuid,
        list_id: Uuid,
    ) -> Result<Option<TodoList>, StoreError> {
        let list = sqlx::query_as::<_, TodoList>(
            r#"
            SELECT tl.id, tl.title, tl.description, tl.created_at
            FROM todo_lists tl
            INNER JOIN users_lists ul ON ul.list_id = tl.id
            WHERE ul.user_id = $1 AND tl.id = $2
            "#,
        )
        .bind(user_id)
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(list)
    }

    async fn update(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        patch: UpdateTodoListDto,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE todo_lists tl
            SET title = COALESCE($1, tl.title),
                description = COALESCE($2, tl.description)
            FROM users_lists ul
            WHERE tl.id = ul.list_id AND ul.user_id = $3 AND tl.id = $4
            "#,
        )
        .bind(patch.title)
        .bind(patch.description)
        .bind(user_id)
        .bind(list_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, user_id: Uuid, list_id: Uuid) -> Result<bool, StoreError> {
        // Items go first; join rows follow through ON DELETE CASCADE
        let result = sqlx::query(
            r#"
            WITH owned AS (
                SELECT list_id FROM users_lists
                WHERE user_id = $1 AND list_id = $2
            ), removed_items AS (
                DELETE FROM todo_items ti
                USING lists_items li, owned
                WHERE ti.id = li.item_id AND li.list_id = owned.list_id
            )
            DELETE FROM todo_lists tl
            USING owned
            WHERE tl.id = owned.list_id
            "#,
        )
        .bind(user_id)
        .bind(list_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
