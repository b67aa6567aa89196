/**
 * Password Hashing
 *
 * bcrypt hashing with a work factor fixed at construction. Both operations
 * are CPU-bound and run on tokio's blocking pool.
 */

use thiserror::Error;

/// Errors raised while hashing a password
#[derive(Debug, Error)]
pub enum HashError {
    #[error("password hashing failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Salted adaptive password hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh salt
    ///
    /// # Arguments
    /// * `plaintext` - Password as typed by the user
    ///
    /// # Returns
    /// The bcrypt hash string, or `HashError` if bcrypt or the blocking task fails
    pub async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;
        Ok(hash)
    }

    /// Check a plaintext attempt against a stored hash
    ///
    /// Any failure, including an unparsable stored hash, counts as a mismatch.
    pub async fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash).unwrap_or(false))
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Password verification task failed: {:?}", e);
                false
            })
    }
}
