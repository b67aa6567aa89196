/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Resource routes (`/api/...`), wrapped in the authorization gate
 * 2. Authentication routes (`/auth/...`), public
 * 3. Fallback handler (404)
 *
 * The gate is attached with `route_layer`, so it only runs for requests that
 * matched a gated route. Unknown paths reach the fallback without a token.
 */

use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{configure_api_routes, configure_auth_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing services and the token manager
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Layers
///
/// - `TraceLayer` - request/response spans through `tracing`
/// - `CorsLayer::permissive()` - any origin, method and header
pub fn create_router(app_state: AppState) -> Router<()> {
    // Gated resource routes
    let protected = configure_api_routes(Router::new()).route_layer(from_fn_with_state(
        app_state.tokens.clone(),
        auth_middleware,
    ));

    // Public authentication routes
    let router = configure_auth_routes(Router::new()).merge(protected);

    // Fallback handler for 404
    let router = router.fallback(not_found);

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found("route not found")
}
