//! Shared integration-test fixtures
//!
//! Provides an in-memory store with migrations applied, a user factory,
//! and `TestServer` builders for both service apps. The two servers in
//! a test share one pool, mirroring the deployed shape where both
//! services read the same database.

#![allow(dead_code)]

use std::str::FromStr;

use axum_test::TestServer;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use feedline::auth::tokens::issue_token;
use feedline::auth::users::{create_user, User};
use feedline::server::init::{auth_app_with_state, feed_app_with_state};
use feedline::server::state::AppState;

/// Signing secret shared by every test token
pub const TEST_SECRET: &str = "test-secret";

/// Minimum bcrypt cost, to keep the suites fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// In-memory store with migrations applied
///
/// The in-memory database lives and dies with its connection, so the
/// pool is capped at a single connection.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect to in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("apply migrations");

    pool
}

/// State over a given pool, signed with the test secret
pub fn test_state(pool: SqlitePool) -> AppState {
    AppState {
        pool,
        jwt_secret: TEST_SECRET.to_string(),
    }
}

/// Authentication service test server
pub fn auth_server(state: AppState) -> TestServer {
    TestServer::new(auth_app_with_state(state)).expect("start auth test server")
}

/// Post service test server
pub fn feed_server(state: AppState) -> TestServer {
    TestServer::new(feed_app_with_state(state)).expect("start feed test server")
}

/// Create a user with a bcrypt-hashed password
pub async fn create_test_user(pool: &SqlitePool, username: &str, password: &str) -> User {
    let hash = bcrypt::hash(password, TEST_BCRYPT_COST).expect("hash password");
    create_user(
        pool,
        username,
        &hash,
        username,
        "tester",
        NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
    )
    .await
    .expect("create test user")
}

/// Issue a token for a user with the test secret
pub fn token_for(user: &User) -> String {
    issue_token(TEST_SECRET, user.id, &user.username).expect("issue test token")
}

/// `Bearer <token>` header value
pub fn bearer(token: &str) -> axum::http::HeaderValue {
    axum::http::HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header value")
}
