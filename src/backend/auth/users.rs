/**
 * User Database Operations
 *
 * PostgreSQL credential store. Email and username uniqueness is enforced by
 * the `users_email_key` and `users_username_key` constraints; a violation is
 * reported as `StoreError::UniqueViolation` naming the column.
 */

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::repository::{StoreError, UserRepository};
use crate::shared::models::{NewUser, User};

/// PostgreSQL-backed [`UserRepository`]
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    /// Create a new user
    ///
    /// # Arguments
    /// * `user` - Email, username and already hashed password
    ///
    /// # Returns
    /// The new user's ID, or `UniqueViolation` if the email or username is taken
    async fn create(&self, user: NewUser) -> Result<Uuid, StoreError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (id, email, username, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_user_insert)?;

        Ok(id)
    }

    /// Get user by email
    ///
    /// # Returns
    /// User or None if not found
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by ID
    ///
    /// # Returns
    /// User or None if not found
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
