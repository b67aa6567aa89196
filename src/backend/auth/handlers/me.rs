/**
 * Get Current User Handler
 *
 * GET /api/me returns the authenticated user's id, email and username. The
 * route sits behind the authorization gate.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::service::UserService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Rejected by the gate
/// * `404 Not Found` - The token names a user that no longer exists
pub async fn get_me(
    State(users): State<UserService>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = users.get_by_id(user_id).await?;
    Ok(Json(user.into()))
}
