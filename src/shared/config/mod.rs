//! Application configuration module
//!
//! Provides the process-wide configuration consumed by the server: the token
//! signing secret, the password hashing cost, the session lifetime, the
//! optional database URL and the listening port. Built once at startup and
//! never mutated afterwards.

use thiserror::Error;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Default session token lifetime in hours
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Longest accepted session token lifetime, ten years in hours
pub const MAX_TOKEN_TTL_HOURS: i64 = 10 * 365 * 24;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Work factor bounds accepted by bcrypt
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Session token lifetime in hours
    pub token_ttl_hours: i64,
    /// HTTP port
    pub port: u16,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidCost(self.bcrypt_cost));
        }
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&self.token_ttl_hours) {
            return Err(ConfigError::InvalidTtl(self.token_ttl_hours));
        }
        if self.jwt_secret.len() < 32 {
            tracing::warn!("JWT secret is shorter than recommended (32 bytes)");
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    bcrypt_cost: Option<u32>,
    token_ttl_hours: Option<i64>,
    port: Option<u16>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the token lifetime in hours
    pub fn token_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl_hours = Some(hours);
        self
    }

    /// Set the HTTP port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            token_ttl_hours: self.token_ttl_hours.unwrap_or(DEFAULT_TOKEN_TTL_HOURS),
            port: self.port.unwrap_or(DEFAULT_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("bcrypt cost {0} is outside the supported range")]
    InvalidCost(u32),
    #[error("token lifetime must be between 1 and {max} hours, got {0}", max = MAX_TOKEN_TTL_HOURS)]
    InvalidTtl(i64),
}
