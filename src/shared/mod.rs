//! Shared Module
//!
//! Types shared by the server and any client of the HTTP API: the domain
//! models and their request payloads, validation errors, and the process
//! configuration.
//!
//! # Overview
//!
//! Nothing in this module touches the network or the database. Request
//! payloads validate themselves so the rules hold wherever the types are
//! deserialized.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Users, lists, items and query modifiers
pub mod models;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
