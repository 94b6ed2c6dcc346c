/**
 * User Model and Store Queries
 *
 * The user table is the credential store: usernames are unique and
 * immutable, passwords live only as bcrypt hashes. Users are created by
 * the seed tool; the services only read them.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// User row in the credential store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, immutable after creation)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// First name, shown in the feed as the author display name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Birth date (calendar date, no time component)
    pub birth_date: NaiveDate,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    first_name: &str,
    last_name: &str,
    birth_date: NaiveDate,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, first_name, last_name, birth_date, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(first_name)
    .bind(last_name)
    .bind(birth_date)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id,
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birth_date,
        created_at: now,
    })
}

/// Get user by username (exact match)
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, first_name, last_name, birth_date, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, first_name, last_name, birth_date, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
