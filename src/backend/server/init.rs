/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store selection, service wiring and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the database if one is configured
 * 2. Pick PostgreSQL repositories, or the in-memory store as fallback
 * 3. Build the password hasher and token manager from the configuration
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenManager;
use crate::backend::repository::Repositories;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::config::{AppConfig, ConfigError};

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated application configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// `ConfigError` if the token manager cannot be built from `config`
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing todo backend server");

    let db_pool = load_database(config.database_url.as_deref()).await;
    let repos = match &db_pool {
        Some(pool) => {
            tracing::info!("Using PostgreSQL store");
            Repositories::postgres(pool.clone())
        }
        None => {
            tracing::info!("Using in-memory store");
            Repositories::in_memory()
        }
    };

    let state = build_state(config, repos)?;
    Ok(create_router(state))
}

/// Wire services over the given repositories
pub fn build_state(config: &AppConfig, repos: Repositories) -> Result<AppState, ConfigError> {
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let tokens = Arc::new(TokenManager::from_config(config)?);

    tracing::info!(
        "Password cost {}, token lifetime {}h",
        config.bcrypt_cost,
        config.token_ttl_hours
    );

    Ok(AppState::new(repos, hasher, tokens))
}
