//! Todo List HTTP Handlers
//!
//! Handlers for `/api/lists` and `/api/lists/{list_id}`. All of them sit
//! behind the authorization gate and take the caller's ID from [`AuthUser`].

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
use crate::backend::lists::service::TodoListService;
use crate::backend::middleware::AuthUser;
use crate::shared::models::{
    CollectionResponse, CreateTodoListDto, IdResponse, SortDirective, TodoList, UpdateTodoListDto,
};

/// Query string of the list collection
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub sort_by: Option<String>,
}

/// Create a list
pub async fn create_list(
    State(lists): State<TodoListService>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<CreateTodoListDto>, JsonRejection>,
) -> Result<(StatusCode, Json<IdResponse>), BackendError> {
    let Json(dto) = payload?;
    let id = lists.create(user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// Get all lists owned by the caller
pub async fn get_all_lists(
    State(lists): State<TodoListService>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<CollectionResponse<TodoList>>, BackendError> {
    let Query(query) = query?;
    let sort = query.sort_by.as_deref().and_then(SortDirective::parse);

    let results = lists.get_all(user_id, sort).await?;
    Ok(Json(CollectionResponse::new(results)))
}

/// Get one list
pub async fn get_list(
    State(lists): State<TodoListService>,
    AuthUser(user_id): AuthUser,
    list_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TodoList>, BackendError> {
    let Path(list_id) = list_id?;
    Ok(Json(lists.get_by_id(user_id, list_id).await?))
}

/// Partially update a list
pub async fn update_list(
    State(lists): State<TodoListService>,
    AuthUser(user_id): AuthUser,
    list_id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateTodoListDto>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Path(list_id) = list_id?;
    let Json(patch) = payload?;

    lists.update(user_id, list_id, patch).await?;
    Ok(StatusCode::OK)
}

/// Delete a list and its items
pub async fn delete_list(
    State(lists): State<TodoListService>,
    AuthUser(user_id): AuthUser,
    list_id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, BackendError> {
    let Path(list_id) = list_id?;
    lists.delete(user_id, list_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
