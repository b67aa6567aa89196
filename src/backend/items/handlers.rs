//! Todo Item HTTP Handlers
//!
//! Item creation and listing are addressed through the parent list
//! (`/api/lists/{list_id}/items`); single items are addressed directly
//! (`/api/items/{item_id}`).

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::items::service::TodoItemService;
use crate::backend::middleware::AuthUser;
use crate::shared::models::{
    CreateTodoItemDto, IdResponse, PageResponse, Pagination, PaginationQuery, SortDirective,
    TodoItem, UpdateTodoItemDto,
};

/// Query string of the item collection
#[derive(Debug, Default, Deserialize)]
pub struct ItemQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
}

impl ItemQuery {
    fn pagination(&self) -> Pagination {
        Pagination::from(PaginationQuery {
            page: self.page,
            limit: self.limit,
        })
    }
}

/// Create an item in one of the caller's lists
pub async fn create_item(
    State(items): State<TodoItemService>,
    AuthUser(user_id): AuthUser,
    list_id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<CreateTodoItemDto>, JsonRejection>,
) -> Result<(StatusCode, Json<IdResponse>), BackendError> {
    let Path(list_id) = list_id?;
    let Json(dto) = payload?;

    let id = items.create(user_id, list_id, dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// One page of a list's items
pub async fn get_all_items(
    State(items): State<TodoItemService>,
    AuthUser(user_id): AuthUser,
    list_id: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<ItemQuery>, QueryRejection>,
) -> Result<Json<PageResponse<TodoItem>>, BackendError> {
    let Path(list_id) = list_id?;
    let Query(query) = query?;

    let pagination = query.pagination();
    let sort = query.sort_by.as_deref().and_then(SortDirective::parse);

    let results = items.get_all(user_id, list_id, pagination, sort).await?;
    Ok(Json(PageResponse::new(results, pagination)))
}

pub async fn get_item(
    State(items): State<TodoItemService>,
    AuthUser(user_id): AuthUser,
    item_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TodoItem>, BackendError> {
    let Path(item_id) = item_id?;
    Ok(Json(items.get_by_id(user_id, item_id).await?))
}

/// Partially update an item
pub async fn update_item(
    State(items): State<TodoItemService>,
    AuthUser(user_id): AuthUser,
    item_id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateTodoItemDto>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Path(item_id) = item_id?;
    let Json(patch) = payload?;

    items.update(user_id, item_id, patch).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_item(
    State(items): State<TodoItemService>,
    AuthUser(user_id): AuthUser,
    item_id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, BackendError> {
    let Path(item_id) = item_id?;
    items.delete(user_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
