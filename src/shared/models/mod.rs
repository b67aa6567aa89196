//! Shared domain models
//!
//! Users, todo lists, todo items and the query modifiers accepted by the
//! collection endpoints. Request payloads carry their own `validate` methods so
//! the same rules apply wherever the types are used.

pub mod query;
pub mod response;
pub mod todo_item;
pub mod todo_list;
pub mod user;

pub use query::{ItemSortField, ListSortField, Pagination, PaginationQuery, SortDirective};
pub use response::{CollectionResponse, IdResponse, PageResponse};
pub use todo_item::{CreateTodoItemDto, NewTodoItem, TodoItem, UpdateTodoItemDto};
pub use todo_list::{CreateTodoListDto, TodoList, UpdateTodoListDto};
pub use user::{CreateUserDto, NewUser, User};
