//! Authentication test helpers
//!
//! Provides utilities for registering test users through the HTTP surface,
//! signing them in and building authorization headers.

use axum::http::{Method, StatusCode};
use axum::Router;
use serde_json::json;
use uuid::Uuid;

use super::send;

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Register and sign in a user
pub async fn create_test_user(
    app: &Router,
    email: &str,
    username: &str,
    password: &str,
) -> TestUser {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/sign-up",
        None,
        Some(json!({ "email": email, "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "sign-up failed: {}", body);
    let id: Uuid = serde_json::from_value(body["id"].clone()).expect("sign-up returns an id");

    let token = sign_in(app, email, password).await;

    TestUser {
        id,
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Register a user with a unique email and username
pub async fn create_unique_test_user(app: &Router) -> TestUser {
    let suffix = Uuid::new_v4().simple().to_string();
    let email = format!("test_{}@example.com", &suffix[..12]);
    let username = format!("user_{}", &suffix[..12]);
    create_test_user(app, &email, &username, "test_password_123").await
}

/// Sign in and return the session token
pub async fn sign_in(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/sign-in",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "sign-in failed: {}", body);

    body["token"]
        .as_str()
        .expect("sign-in returns a token")
        .to_string()
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
