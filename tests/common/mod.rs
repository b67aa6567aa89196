//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An app wired over the in-memory store
//! - Request helpers returning status and JSON body
//! - Authentication test helpers
//! - PostgreSQL fixtures for the ignored store tests
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use auth_helpers::*;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use todo_app::backend::repository::Repositories;
use todo_app::backend::routes::create_router;
use todo_app::backend::server::{build_state, AppState};
use todo_app::shared::config::AppConfig;

/// Secret shared by every test app
pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// Configuration with the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("test configuration is valid")
}

/// Application state over a fresh in-memory store
pub fn test_state() -> AppState {
    build_state(&test_config(), Repositories::in_memory()).expect("test state builds")
}

/// Router over a fresh in-memory store
pub fn test_app() -> Router {
    create_router(test_state())
}

/// Send one request through the router
///
/// Returns the status and the parsed JSON body (`Value::Null` when empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, auth_header(token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    send_request(app, request).await
}

/// Send a prebuilt request through the router
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body is readable")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };
    (status, value)
}
