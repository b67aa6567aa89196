/**
 * Authentication Middleware
 *
 * The authorization gate in front of every `/api` route. It reads the
 * `Authorization` header, verifies the session token and stores the caller's
 * user ID in the request extensions, where handlers pick it up through the
 * [`AuthUser`] extractor.
 *
 * # Checks, in order
 *
 * 1. Missing or empty header: `"empty auth header"`
 * 2. Anything but exactly `Bearer <token>` split on single spaces: `"invalid auth token"`
 * 3. Empty token: `"no token provided"`
 * 4. Signature or decoding failure: the verifier's message
 * 5. Expired token: `"token is expired"`
 *
 * All failures are 401 Unauthorized.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::backend::auth::sessions::{TokenError, TokenManager};
use crate::backend::error::BackendError;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing, invalid or expired.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authorize(request.headers(), &tokens, Utc::now()).map_err(|e| {
        tracing::warn!("Rejected request to {}: {}", request.uri().path(), e.message());
        e
    })?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Run the gate's checks against a set of headers at instant `now`
pub fn authorize(
    headers: &HeaderMap,
    tokens: &TokenManager,
    now: DateTime<Utc>,
) -> Result<AuthenticatedUser, BackendError> {
    let header = match headers.get(AUTHORIZATION) {
        None => return Err(BackendError::unauthorized("empty auth header")),
        Some(value) if value.is_empty() => {
            return Err(BackendError::unauthorized("empty auth header"))
        }
        Some(value) => value
            .to_str()
            .map_err(|_| BackendError::unauthorized("invalid auth token"))?,
    };

    let parts: Vec<&str> = header.split(' ').collect();
    let token = match parts.as_slice() {
        ["Bearer", token] => *token,
        _ => return Err(BackendError::unauthorized("invalid auth token")),
    };

    if token.is_empty() {
        return Err(BackendError::unauthorized("no token provided"));
    }

    let claims = tokens
        .verify(token)
        .map_err(|e| BackendError::unauthorized(e.to_string()))?;

    if claims.is_expired_at(now) {
        return Err(BackendError::unauthorized(TokenError::Expired.to_string()));
    }

    Ok(AuthenticatedUser {
        user_id: claims.user_id,
    })
}

/// Axum extractor for authenticated user
///
/// Only valid behind [`auth_middleware`]; elsewhere it rejects with 401.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub Uuid);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .map(|user| AuthUser(user.user_id))
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("empty auth header")
            })
    }
}
