/**
 * Post and Like Store Queries
 *
 * All feed access to the store lives here: post insertion, the joined
 * feed read, the atomic like upsert, and the like count.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Post row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub message: String,
    pub author_id: Uuid,
    pub published_at: DateTime<Utc>,
}

/// One feed entry: a post joined with its author's display data and the
/// like count as of read time
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostView {
    pub id: Uuid,
    pub message: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
    pub author_name: String,
    pub like_count: i64,
}

/// Insert a new post
///
/// The caller supplies the publication timestamp (the handler passes the
/// server clock).
pub async fn insert_post(
    pool: &SqlitePool,
    author_id: Uuid,
    message: &str,
    published_at: DateTime<Utc>,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO posts (id, message, author_id, published_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(message)
    .bind(author_id)
    .bind(published_at)
    .execute(pool)
    .await?;

    Ok(Post {
        id,
        message: message.to_string(),
        author_id,
        published_at,
    })
}

/// List all posts, newest first
///
/// Full-table read: every post, joined with the author's username and
/// first name, with the like count computed at read time.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<PostView>, sqlx::Error> {
    sqlx::query_as::<_, PostView>(
        r#"
        SELECT
            p.id,
            p.message,
            p.published_at,
            u.username AS author,
            u.first_name AS author_name,
            (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count
        FROM posts p
        JOIN users u ON u.id = p.author_id
        ORDER BY p.published_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Record a like, once
///
/// A single atomic conditional insert: if the (post, user) pair already
/// exists the statement is a no-op, so concurrent duplicate likes cannot
/// race. A foreign-key violation (unknown post) is returned to the
/// caller untranslated.
pub async fn upsert_like(
    pool: &SqlitePool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO likes (post_id, user_id, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (post_id, user_id) DO NOTHING
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Total like count for a post
pub async fn count_likes(pool: &SqlitePool, post_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await
}
