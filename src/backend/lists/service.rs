/**
 * Todo List Service
 *
 * Field rules and the per-user cap for lists. Every call takes the verified
 * user id from the authorization gate as its first argument and hands it to
 * the store, which qualifies the query through the ownership index.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::repository::TodoListRepository;
use crate::shared::models::todo_list::MAX_LISTS_PER_USER;
use crate::shared::models::{
    CreateTodoListDto, ListSortField, SortDirective, TodoList, UpdateTodoListDto,
};

pub const LIST_NOT_FOUND: &str = "todo list not found";
pub const NO_LISTS_FOUND: &str = "no todo lists found";
pub const LIST_LIMIT_EXCEEDED: &str = "exceeded the maximum allowed limit of existing lists";

#[derive(Clone)]
pub struct TodoListService {
    lists: Arc<dyn TodoListRepository>,
}

impl TodoListService {
    pub fn new(lists: Arc<dyn TodoListRepository>) -> Self {
        Self { lists }
    }

    /// Create a list owned by `user_id`
    ///
    /// The cap is checked before the fields.
    pub async fn create(&self, user_id: Uuid, dto: CreateTodoListDto) -> Result<Uuid, BackendError> {
        if self.lists.count(user_id).await? >= MAX_LISTS_PER_USER {
            return Err(BackendError::validation(LIST_LIMIT_EXCEEDED));
        }
        dto.validate()?;

        let id = self.lists.create(user_id, dto).await?;
        tracing::info!("User {} created list {}", user_id, id);
        Ok(id)
    }

    /// All lists owned by `user_id`; an empty result is `NotFound`
    pub async fn get_all(
        &self,
        user_id: Uuid,
        sort: Option<SortDirective<ListSortField>>,
    ) -> Result<Vec<TodoList>, BackendError> {
        let lists = self.lists.get_all(user_id, sort).await?;
        if lists.is_empty() {
            return Err(BackendError::not_found(NO_LISTS_FOUND));
        }
        Ok(lists)
    }

    pub async fn get_by_id(&self, user_id: Uuid, list_id: Uuid) -> Result<TodoList, BackendError> {
        self.lists
            .get_by_id(user_id, list_id)
            .await?
            .ok_or_else(|| BackendError::not_found(LIST_NOT_FOUND))
    }

    /// Apply a partial update
    ///
    /// An empty patch is rejected before the store is touched.
    pub async fn update(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        patch: UpdateTodoListDto,
    ) -> Result<(), BackendError> {
        patch.validate()?;

        if !self.lists.update(user_id, list_id, patch).await? {
            return Err(BackendError::not_found(LIST_NOT_FOUND));
        }
        Ok(())
    }

    /// Delete a list and its items; a missing or foreign list is a no-op
    pub async fn delete(&self, user_id: Uuid, list_id: Uuid) -> Result<(), BackendError> {
        if self.lists.delete(user_id, list_id).await? {
            tracing::info!("User {} deleted list {}", user_id, list_id);
        }
        Ok(())
    }
}
