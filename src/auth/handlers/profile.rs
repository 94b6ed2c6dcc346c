/**
 * Profile Handler
 *
 * Implements GET /profile, returning the authenticated caller's own
 * profile. The auth gate has already attributed the request, so the
 * handler only resolves the attached user id against the store - which
 * can still miss if the user row was deleted after the token was issued.
 */

use axum::{extract::State, Json};

use crate::auth::handlers::types::ProfileResponse;
use crate::auth::users::find_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Own-profile handler
///
/// # Errors
///
/// * `401 Unauthorized` - rejected by the auth gate before this runs
/// * `404 Not Found` - the user behind the token no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let record = find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Profile not found for user {}", user.user_id);
            ApiError::not_found("User profile not found")
        })?;

    Ok(Json(ProfileResponse {
        username: record.username,
        first_name: record.first_name,
        last_name: record.last_name,
        birth_date: record.birth_date,
    }))
}
