/**
 * Auth Gate
 *
 * Middleware protecting every route that requires an authenticated
 * caller. It extracts the bearer token from the Authorization header,
 * verifies it with the token codec, and attaches the decoded identity
 * to the request extensions before any handler observes the request.
 *
 * The gate deliberately does not consult the store: a token whose user
 * has since been deleted still passes here and fails later, at whichever
 * handler needs the user row (accepted limitation).
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Missing header, or a scheme other than `Bearer`
const MISSING_CREDENTIAL: &str = "Access denied: authentication required";
/// Present but unverifiable token
const INVALID_CREDENTIAL: &str = "Invalid or expired token";

/// Authenticated identity decoded from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Authentication middleware
///
/// 1. Require an `Authorization: Bearer <token>` header (401 otherwise)
/// 2. Verify the token's signature and expiry (401 otherwise)
/// 3. Attach the decoded identity to the request extensions
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::authentication(MISSING_CREDENTIAL)
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a Bearer credential");
        ApiError::authentication(MISSING_CREDENTIAL)
    })?;

    let claims = verify_token(&state.jwt_secret, token).map_err(|e| {
        tracing::warn!("Token verification failed: {e}");
        ApiError::authentication(INVALID_CREDENTIAL)
    })?;

    // A sub that is not a UUID can only come from a token we did not
    // mint, so it gets the same 401 as a bad signature.
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| ApiError::authentication(INVALID_CREDENTIAL))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by `require_auth`
///
/// Use as a handler parameter on routes behind the gate. Requests that
/// somehow reach a handler without the gate having run are rejected.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::authentication(MISSING_CREDENTIAL)
            })?;

        Ok(AuthUser(user))
    }
}
