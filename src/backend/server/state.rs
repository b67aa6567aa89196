/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The user, list and item services
 * - The token manager used by the authorization gate
 *
 * Everything in it is immutable after startup; services share their stores
 * through `Arc`.
 *
 * # Example
 *
 * ```rust,no_run
 * use todo_app::backend::lists::TodoListService;
 * use axum::extract::State;
 *
 * async fn handler(State(lists): State<TodoListService>) {
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::service::UserService;
use crate::backend::auth::sessions::TokenManager;
use crate::backend::items::service::TodoItemService;
use crate::backend::lists::service::TodoListService;
use crate::backend::repository::Repositories;

/// Application state shared by every handler
///
/// # Fields
///
/// * `users` - Registration, sign-in and current-user lookup
/// * `lists` - Ownership-scoped list operations
/// * `items` - Ownership-scoped item operations
/// * `tokens` - Session token issuer and verifier
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub lists: TodoListService,
    pub items: TodoItemService,
    pub tokens: Arc<TokenManager>,
}

impl AppState {
    /// Wire the services over a set of repositories
    pub fn new(repos: Repositories, hasher: PasswordHasher, tokens: Arc<TokenManager>) -> Self {
        Self {
            users: UserService::new(repos.users, hasher, tokens.clone()),
            lists: TodoListService::new(repos.lists),
            items: TodoItemService::new(repos.items, repos.ownership),
            tokens,
        }
    }
}

/// Implement FromRef for UserService
impl FromRef<AppState> for UserService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

/// Implement FromRef for TodoListService
impl FromRef<AppState> for TodoListService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.lists.clone()
    }
}

/// Implement FromRef for TodoItemService
impl FromRef<AppState> for TodoItemService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.items.clone()
    }
}

/// Implement FromRef for the token manager
///
/// This allows the authorization gate to extract `Arc<TokenManager>` directly
/// from `AppState`.
impl FromRef<AppState> for Arc<TokenManager> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
