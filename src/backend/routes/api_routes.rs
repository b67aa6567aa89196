/**
 * API Route Tables
 *
 * This module defines the two route groups of the service:
 * - Authentication endpoints, reachable without a token
 * - Resource endpoints under `/api`, which the router wraps in the
 *   authorization gate
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/sign-up` - User registration
 * - `POST /auth/sign-in` - User login
 *
 * ## Resources
 * - `GET /api/me` - Get current user info
 * - `/api/lists`, `/api/lists/{list_id}`, `/api/lists/{list_id}/items`
 * - `/api/items/{item_id}`
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{get_me, sign_in, sign_up};
use crate::backend::items::{create_item, delete_item, get_all_items, get_item, update_item};
use crate::backend::lists::{create_list, delete_list, get_all_lists, get_list, update_list};
use crate::backend::server::state::AppState;

/// Configure the public authentication routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with `/auth/sign-up` and `/auth/sign-in` configured
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/sign-in", post(sign_in))
}

/// Configure the resource routes
///
/// None of these routes check the token themselves; the caller must wrap the
/// returned router in the authorization gate.
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the `/api` routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Current user
        .route("/api/me", get(get_me))
        // Lists
        .route("/api/lists", post(create_list).get(get_all_lists))
        .route(
            "/api/lists/{list_id}",
            get(get_list).patch(update_list).delete(delete_list),
        )
        // Items, addressed through their list
        .route(
            "/api/lists/{list_id}/items",
            post(create_item).get(get_all_items),
        )
        // Items, addressed directly
        .route(
            "/api/items/{item_id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
}
