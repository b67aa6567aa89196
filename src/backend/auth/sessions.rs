/**
 * Session Management and JWT Tokens
 *
 * Tokens are HMAC-signed JWTs whose payload is `{"userID", "expiresAt"}`,
 * with `expiresAt` as an RFC 3339 timestamp. Verification checks the
 * signature and decodes the claims; it does not look at the expiry. Callers
 * compare `expiresAt` against the clock themselves (see [`Claims::is_expired_at`]).
 *
 * # Accepted algorithms
 *
 * Only the HMAC family (HS256, HS384, HS512) is accepted. Tokens are issued
 * with HS256. A header naming any other algorithm, including ones
 * `jsonwebtoken` cannot parse such as `none`, fails with
 * [`TokenError::UnexpectedAlgorithm`].
 */

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::config::{AppConfig, ConfigError};

/// HMAC algorithms accepted on verification
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Just the `alg` member of a JOSE header
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    #[serde(rename = "userID")]
    pub user_id: Uuid,
    /// Expiration time
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// A token is expired from its `expiresAt` instant onwards
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Token failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature is invalid")]
    BadSignature,

    #[error("token is malformed")]
    Malformed,

    #[error("unexpected signing method: {0}")]
    UnexpectedAlgorithm(String),

    #[error("token is expired")]
    Expired,

    #[error("token expiry is out of range")]
    ExpiryOutOfRange,

    #[error("failed to sign token")]
    Encoding,
}

/// Issues and verifies session tokens
///
/// The signing secret and token lifetime are fixed at construction.
#[derive(Clone)]
pub struct TokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    /// Create a token manager
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_aud = false;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Build from the application configuration
    ///
    /// # Errors
    /// `ConfigError::InvalidTtl` if the lifetime does not fit a `Duration`
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let ttl = Duration::try_hours(config.token_ttl_hours)
            .ok_or(ConfigError::InvalidTtl(config.token_ttl_hours))?;
        Ok(Self::new(&config.jwt_secret, ttl))
    }

    /// Create a JWT token for a user, expiring one lifetime from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Create a JWT token as if issued at `now`
    ///
    /// # Returns
    /// Compact JWT string, or `ExpiryOutOfRange` if `now` plus the lifetime
    /// overflows the calendar
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String, TokenError> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or(TokenError::ExpiryOutOfRange)?;
        let claims = Claims {
            user_id,
            expires_at,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            tracing::error!("Failed to sign token: {:?}", e);
            TokenError::Encoding
        })
    }

    /// Verify the signature and decode the claims
    ///
    /// Expiry is left to the caller.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let header = decode_header(token).map_err(|_| match raw_algorithm(token) {
            Some(alg) if !is_accepted_name(&alg) => TokenError::UnexpectedAlgorithm(alg),
            _ => TokenError::Malformed,
        })?;
        if !ACCEPTED_ALGORITHMS.contains(&header.alg) {
            return Err(TokenError::UnexpectedAlgorithm(format!("{:?}", header.alg)));
        }

        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                ErrorKind::InvalidAlgorithm => {
                    TokenError::UnexpectedAlgorithm(format!("{:?}", header.alg))
                }
                _ => TokenError::Malformed,
            }
        })?;

        Ok(data.claims)
    }
}

/// Read `alg` straight from the encoded header
///
/// Used when `jsonwebtoken` refuses the header, so an unknown algorithm can
/// still be reported by name.
fn raw_algorithm(token: &str) -> Option<String> {
    let (encoded, _) = token.split_once('.')?;
    let bytes = URL_SAFE_NO_PAD.decode(encoded.trim_end_matches('=')).ok()?;
    serde_json::from_slice::<RawHeader>(&bytes)
        .ok()
        .map(|header| header.alg)
}

fn is_accepted_name(alg: &str) -> bool {
    ACCEPTED_ALGORITHMS
        .iter()
        .any(|accepted| format!("{:?}", accepted) == alg)
}
