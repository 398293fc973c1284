//! Bearer Token Middleware
//!
//! Guards the mutating post routes. Splits the two failure modes the
//! protocol distinguishes: a missing token is 401, a token that fails
//! verification (bad signature, malformed, expired) is 403.

use axum::body::Body;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::Response;
use platform::token;
use std::sync::Arc;

use crate::application::config::PostConfig;
use crate::error::{PostError, PostResult};

/// Middleware state
#[derive(Clone)]
pub struct TokenGuard {
    pub config: Arc<PostConfig>,
}

/// Verified identity, stored in request extensions for downstream
/// handlers. Currently informational only: trust is flat and no handler
/// checks ownership.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Middleware that requires a valid bearer token
pub async fn require_bearer(
    axum::extract::State(guard): axum::extract::State<TokenGuard>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, PostError> {
    let user_id = authorize(req.headers(), &guard.config)?;

    tracing::debug!(user_id, "Bearer token accepted");

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Extract and verify the token from an `Authorization: Bearer <token>`
/// header, returning the embedded user id.
pub fn authorize(headers: &HeaderMap, config: &PostConfig) -> PostResult<i64> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    // Second whitespace-separated segment is the token
    let token = header_value
        .and_then(|h| h.split(' ').nth(1))
        .filter(|t| !t.is_empty())
        .ok_or(PostError::TokenMissing)?;

    let claims =
        token::verify(token, &config.token_secret).map_err(|_| PostError::TokenRejected)?;

    Ok(claims.user_id)
}
