/**
 * Authentication Handler Types
 *
 * Request and response types used by the sign-up, sign-in and current-user
 * handlers. Sign-up takes [`CreateUserDto`](crate::shared::models::CreateUserDto)
 * directly.
 */

use serde::{Deserialize, Serialize};

use crate::shared::models::User;

/// Sign in request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignInRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Sign in response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// JWT token for the `Authorization: Bearer` header
    pub token: String,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: uuid::Uuid,
    /// User's email address
    pub email: String,
    /// User's username
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
        }
    }
}
