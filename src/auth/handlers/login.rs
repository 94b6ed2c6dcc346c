/**
 * Login Handler
 *
 * Implements POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password with bcrypt
 * 3. Issue a signed token
 *
 * # Security
 *
 * An unknown username and a wrong password both answer with the same
 * 401 body, so the endpoint cannot be used to enumerate usernames.
 * Passwords are never logged.
 */

use axum::{extract::State, Json};
use bcrypt::verify;

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::tokens::issue_token;
use crate::auth::users::find_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Single message for both unknown-user and wrong-password failures
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - username or password missing from the body
/// * `401 Unauthorized` - unknown username or wrong password
/// * `500 Internal Server Error` - store or token failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (username, password) = match (request.username, request.password) {
        (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
            (username, password)
        }
        _ => return Err(ApiError::validation("Missing credentials")),
    };

    tracing::info!("Login request for: {}", username);

    let Some(user) = find_by_username(&state.pool, &username).await? else {
        tracing::warn!("Login failed: unknown user");
        return Err(ApiError::authentication(INVALID_CREDENTIALS));
    };

    if !verify(&password, &user.password_hash)? {
        tracing::warn!("Login failed: invalid password for {}", user.username);
        return Err(ApiError::authentication(INVALID_CREDENTIALS));
    }

    let token = issue_token(&state.jwt_secret, user.id, &user.username)?;

    tracing::info!("User logged in: {}", user.username);

    Ok(Json(LoginResponse { token }))
}
