/**
 * Feed Surface Handlers
 *
 * HTTP handlers for the post service. All routes except the liveness
 * check sit behind the auth gate.
 *
 * # Handlers
 *
 * - `create_post` - POST /posts
 * - `list_posts`  - GET /posts
 * - `like_post`   - POST /posts/{post_id}/like
 * - `service_status` - GET / (public liveness message)
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

use super::db;

/// Create-post request body
#[derive(Deserialize, Serialize, Debug)]
pub struct CreatePostRequest {
    /// Post text; must contain at least one non-whitespace character
    pub message: Option<String>,
}

/// Created post, as returned by POST /posts
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub message: String,
    pub published_at: DateTime<Utc>,
}

/// One entry of GET /posts
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PostViewResponse {
    pub id: Uuid,
    pub message: String,
    pub published_at: DateTime<Utc>,
    /// Author's username
    pub author: String,
    /// Author's first name
    pub author_name: String,
    pub like_count: i64,
}

impl From<db::PostView> for PostViewResponse {
    fn from(view: db::PostView) -> Self {
        Self {
            id: view.id,
            message: view.message,
            published_at: view.published_at,
            author: view.author,
            author_name: view.author_name,
            like_count: view.like_count,
        }
    }
}

/// GET /posts response envelope
#[derive(Serialize, Deserialize, Debug)]
pub struct FeedResponse {
    pub posts: Vec<PostViewResponse>,
}

/// POST /posts/{post_id}/like response
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    /// Total like count after the operation, not a delta
    pub like_count: i64,
}

/// Public liveness check
pub async fn service_status() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Post service is online." }))
}

/// Create a post
///
/// # Errors
///
/// * `400 Bad Request` - message absent, empty, or whitespace-only
/// * `401 Unauthorized` - rejected by the auth gate
/// * `500 Internal Server Error` - store failure
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let message = request.message.unwrap_or_default();
    if message.trim().is_empty() {
        return Err(ApiError::validation("Message must not be empty"));
    }

    let post = db::insert_post(&state.pool, user.user_id, &message, Utc::now()).await?;

    tracing::info!("Post {} created by {}", post.id, user.username);

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            id: post.id,
            message: post.message,
            published_at: post.published_at,
        }),
    ))
}

/// List all posts, newest first
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<FeedResponse>, ApiError> {
    let posts = db::list_posts(&state.pool)
        .await?
        .into_iter()
        .map(PostViewResponse::from)
        .collect();

    Ok(Json(FeedResponse { posts }))
}

/// Like a post, idempotently
///
/// Repeated likes from the same user are no-ops; every call answers with
/// the post's total like count, so retries observe the same steady
/// state.
///
/// # Errors
///
/// * `400 Bad Request` - path segment is not a well-formed post id
/// * `404 Not Found` - no post with that id (surfaced by the store as a
///   foreign-key violation on the conditional insert)
/// * `401 Unauthorized` - rejected by the auth gate
/// * `500 Internal Server Error` - any other store failure
pub async fn like_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<LikeResponse>, ApiError> {
    let post_id =
        Uuid::parse_str(&post_id).map_err(|_| ApiError::validation("Invalid post id"))?;

    match db::upsert_like(&state.pool, post_id, user.user_id).await {
        Ok(()) => {}
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            return Err(ApiError::not_found("Post does not exist"));
        }
        Err(e) => return Err(e.into()),
    }

    let like_count = db::count_likes(&state.pool, post_id).await?;

    Ok(Json(LikeResponse { like_count }))
}
