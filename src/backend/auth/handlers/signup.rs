/**
 * Sign Up Handler
 *
 * This module implements the user registration handler for POST /auth/sign-up.
 *
 * # Registration Process
 *
 * 1. Validate email, username and password format
 * 2. Hash password using bcrypt
 * 3. Create user in the credential store
 * 4. Return the new user's ID
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with the configured cost
 * - Passwords are never returned in responses or logged
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::service::UserService;
use crate::backend::error::BackendError;
use crate::shared::models::{CreateUserDto, IdResponse};

/// Sign up handler
///
/// # Arguments
///
/// * `State(users)` - User service
/// * `payload` - Email, username and password
///
/// # Returns
///
/// JSON response with the new user's ID
///
/// # Errors
///
/// * `400 Bad Request` - Invalid JSON or a broken registration rule
/// * `409 Conflict` - Email or username already taken
/// * `500 Internal Server Error` - Hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /auth/sign-up HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "a@x.com",
///   "username": "alice",
///   "password": "password123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "id": "123e4567-e89b-12d3-a456-426614174000" }
/// ```
pub async fn sign_up(
    State(users): State<UserService>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<Json<IdResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Sign-up request for username: {}", request.username);

    let id = users.create_user(request).await?;
    Ok(Json(IdResponse { id }))
}
