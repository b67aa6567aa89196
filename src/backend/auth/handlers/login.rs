/**
 * Sign In Handler
 *
 * This module implements the user authentication handler for POST /auth/sign-in.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a JWT token
 *
 * # Security
 *
 * - An unknown email and a wrong password both return 401 "wrong credentials"
 * - Passwords are never logged or returned
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{SignInRequest, TokenResponse};
use crate::backend::auth::service::UserService;
use crate::backend::error::BackendError;

/// Sign in handler
///
/// # Arguments
///
/// * `State(users)` - User service
/// * `payload` - Email and password
///
/// # Returns
///
/// JSON response with the session token
///
/// # Errors
///
/// * `400 Bad Request` - Invalid JSON
/// * `401 Unauthorized` - Unknown email or wrong password
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn sign_in(
    State(users): State<UserService>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload?;

    let token = users.generate_token(&request.email, &request.password).await?;
    Ok(Json(TokenResponse { token }))
}
