/**
 * User Service
 *
 * Registration, sign-in and lookup of the current user. Sits between the auth
 * handlers and the credential store, owning the password hasher and the token
 * manager.
 *
 * # Security
 *
 * - An unknown email and a wrong password fail with the same message, and
 *   both pay for one bcrypt verification
 * - Plaintext passwords and issued tokens are never logged
 */

use std::sync::Arc;

use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenManager;
use crate::backend::error::BackendError;
use crate::backend::repository::UserRepository;
use crate::shared::models::{CreateUserDto, NewUser, User};

/// Message for any failed sign-in
pub const WRONG_CREDENTIALS: &str = "wrong credentials";

/// Plaintext behind the hash checked for unknown emails
const DUMMY_PASSWORD: &str = "dummy-password-for-unknown-emails";

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
    tokens: Arc<TokenManager>,
    /// Hash at the configured cost, built on the first unknown-email sign-in
    dummy_hash: Arc<OnceCell<String>>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: PasswordHasher,
        tokens: Arc<TokenManager>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Register a new user
    ///
    /// # Arguments
    /// * `dto` - Email, username and plaintext password
    ///
    /// # Returns
    /// The new user's ID
    ///
    /// # Errors
    /// * `SharedError` - a registration rule is broken
    /// * `Store(UniqueViolation)` - email or username already taken
    pub async fn create_user(&self, dto: CreateUserDto) -> Result<Uuid, BackendError> {
        dto.validate()?;

        let password_hash = self.hasher.hash(&dto.password).await?;
        let id = self
            .users
            .create(NewUser {
                email: dto.email,
                username: dto.username,
                password_hash,
            })
            .await?;

        tracing::info!("User registered: {}", id);
        Ok(id)
    }

    /// Check credentials and issue a session token
    ///
    /// # Returns
    /// Signed JWT carrying the user's ID
    ///
    /// # Errors
    /// * `Unauthorized("wrong credentials")` - unknown email or wrong password
    pub async fn generate_token(&self, email: &str, password: &str) -> Result<String, BackendError> {
        let Some(user) = self.users.get_by_email(email).await? else {
            tracing::warn!("Sign-in attempt for unknown email");
            self.verify_dummy(password).await;
            return Err(BackendError::unauthorized(WRONG_CREDENTIALS));
        };

        if !self.hasher.verify(password, &user.password_hash).await {
            tracing::warn!("Wrong password for user {}", user.id);
            return Err(BackendError::unauthorized(WRONG_CREDENTIALS));
        }

        let token = self
            .tokens
            .issue(user.id)
            .map_err(|e| BackendError::internal(e.to_string()))?;

        tracing::info!("User signed in: {}", user.id);
        Ok(token)
    }

    /// Run one bcrypt verification whose result is thrown away
    async fn verify_dummy(&self, password: &str) {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| self.hasher.hash(DUMMY_PASSWORD))
            .await;

        match hash {
            Ok(hash) => {
                self.hasher.verify(password, hash).await;
            }
            Err(e) => tracing::error!("Failed to build dummy hash: {}", e),
        }
    }

    /// Look up a user by ID
    pub async fn get_by_id(&self, user_id: Uuid) -> Result<User, BackendError> {
        self.users
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| BackendError::not_found("user not found"))
    }
}
