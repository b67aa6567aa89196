/**
 * Todo Item Service
 *
 * Field and deadline rules for items. Creation checks list ownership first and
 * answers `Forbidden`; reads, updates and deletes rely on the ownership join
 * in the store, so a foreign item reads as missing.
 */

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::ownership::OwnershipIndex;
use crate::backend::repository::TodoItemRepository;
use crate::shared::models::{
    CreateTodoItemDto, ItemSortField, Pagination, SortDirective, TodoItem, UpdateTodoItemDto,
};

pub const ITEM_NOT_FOUND: &str = "todo item not found";
pub const NO_ITEMS_FOUND: &str = "no todo items found";
pub const FORBIDDEN: &str = "forbidden";

#[derive(Clone)]
pub struct TodoItemService {
    items: Arc<dyn TodoItemRepository>,
    ownership: Arc<dyn OwnershipIndex>,
}

impl TodoItemService {
    pub fn new(items: Arc<dyn TodoItemRepository>, ownership: Arc<dyn OwnershipIndex>) -> Self {
        Self { items, ownership }
    }

    /// Create an item in a list owned by `user_id`
    ///
    /// # Errors
    /// * `Forbidden("forbidden")` - the caller does not own the list
    /// * `SharedError` - short title/description or a deadline in the past
    pub async fn create(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        dto: CreateTodoItemDto,
    ) -> Result<Uuid, BackendError> {
        if !self.ownership.owns_list(user_id, list_id).await? {
            tracing::warn!("User {} tried to add an item to list {}", user_id, list_id);
            return Err(BackendError::forbidden(FORBIDDEN));
        }

        let item = dto.into_new_item(Utc::now())?;

        // The store re-checks ownership inside its transaction
        let id = self
            .items
            .create(user_id, list_id, item)
            .await?
            .ok_or_else(|| BackendError::forbidden(FORBIDDEN))?;

        tracing::info!("User {} created item {} in list {}", user_id, id, list_id);
        Ok(id)
    }

    /// One page of the items in an owned list; an empty page is `NotFound`
    pub async fn get_all(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        pagination: Pagination,
        sort: Option<SortDirective<ItemSortField>>,
    ) -> Result<Vec<TodoItem>, BackendError> {
        let items = self.items.get_all(user_id, list_id, pagination, sort).await?;
        if items.is_empty() {
            return Err(BackendError::not_found(NO_ITEMS_FOUND));
        }
        Ok(items)
    }

    pub async fn get_by_id(&self, user_id: Uuid, item_id: Uuid) -> Result<TodoItem, BackendError> {
        self.items
            .get_by_id(user_id, item_id)
            .await?
            .ok_or_else(|| BackendError::not_found(ITEM_NOT_FOUND))
    }

    /// Apply a partial update
    ///
    /// A new deadline is checked against the item's creation time, which
    /// needs one ownership-qualified read first.
    pub async fn update(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        patch: UpdateTodoItemDto,
    ) -> Result<(), BackendError> {
        patch.validate()?;

        if patch.deadline.is_some() {
            let current = self.get_by_id(user_id, item_id).await?;
            patch.validate_deadline(current.created_at)?;
        }

        if !self.items.update(user_id, item_id, patch).await? {
            return Err(BackendError::not_found(ITEM_NOT_FOUND));
        }
        Ok(())
    }

    /// Delete an item; a missing or foreign item is a no-op
    pub async fn delete(&self, user_id: Uuid, item_id: Uuid) -> Result<(), BackendError> {
        if self.items.delete(user_id, item_id).await? {
            tracing::info!("User {} deleted item {}", user_id, item_id);
        }
        Ok(())
    }
}
