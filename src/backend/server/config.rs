/**
 * Server Configuration
 *
 * This module loads the application configuration from the environment and
 * opens the optional PostgreSQL connection.
 *
 * # Configuration Sources
 *
 * Environment variables, after `.env` has been loaded by `main`:
 *
 * | Variable          | Default | Meaning                          |
 * |-------------------|---------|----------------------------------|
 * | `JWT_SECRET`      | none    | Token signing secret (required)  |
 * | `DATABASE_URL`    | unset   | PostgreSQL connection string     |
 * | `BCRYPT_COST`     | 12      | bcrypt work factor               |
 * | `TOKEN_TTL_HOURS` | 24      | Session token lifetime           |
 * | `SERVER_PORT`     | 3000    | HTTP port                        |
 *
 * # Error Handling
 *
 * A missing secret or an unparsable number stops startup. Database problems
 * do not: they are logged and the server falls back to the in-memory store.
 */

use std::str::FromStr;

use sqlx::PgPool;

use crate::shared::config::{AppConfig, ConfigError};

/// Read an optional variable; empty counts as unset
fn read_var(name: &'static str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Read and parse an optional variable
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    read_var(name)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidValue { name, value })
        })
        .transpose()
}

/// Load the application configuration from the environment
///
/// # Returns
///
/// A validated [`AppConfig`], or the first [`ConfigError`] found
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut builder = AppConfig::builder();

    if let Some(secret) = read_var("JWT_SECRET") {
        builder = builder.jwt_secret(secret);
    }
    if let Some(url) = read_var("DATABASE_URL") {
        builder = builder.database_url(url);
    }
    if let Some(cost) = parse_var::<u32>("BCRYPT_COST")? {
        builder = builder.bcrypt_cost(cost);
    }
    if let Some(hours) = parse_var::<i64>("TOKEN_TTL_HOURS")? {
        builder = builder.token_ttl_hours(hours);
    }
    if let Some(port) = parse_var::<u16>("SERVER_PORT")? {
        builder = builder.port(port);
    }

    builder.build()
}

/// Load and initialize database connection pool
///
/// This function:
/// 1. Connects to `database_url`
/// 2. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if database is successfully configured
/// - `None` if no URL is configured, the connection fails or migrations fail
pub async fn load_database(database_url: Option<&str>) -> Option<PgPool> {
    let Some(database_url) = database_url else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory store.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to the in-memory store.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    if let Err(e) = sqlx::migrate!().run(&pool).await {
        tracing::error!("Failed to run database migrations: {}", e);
        tracing::warn!("Falling back to the in-memory store.");
        return None;
    }
    tracing::info!("Database migrations completed successfully");

    Some(pool)
}
