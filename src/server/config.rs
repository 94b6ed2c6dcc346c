/**
 * Server Configuration
 *
 * Environment-driven configuration for both services, plus store pool
 * construction. Both binaries must see the same `DATABASE_URL` and
 * `JWT_SECRET` for tokens issued by one service to verify at the other.
 *
 * # Environment Variables
 *
 * - `DATABASE_URL`       - sqlite URL, default `sqlite://feedline.db`
 * - `JWT_SECRET`         - token signing secret (warned fallback for dev)
 * - `AUTH_SERVICE_PORT`  - identity surface port, default 3000
 * - `POST_SERVICE_PORT`  - feed surface port, default 3001
 * - `CLIENT_ORIGIN`      - CORS origin, default http://localhost:5173
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Development fallback for the token signing secret
const DEV_JWT_SECRET: &str = "dev-secret-change-in-production";

/// Default CORS origin for the bundled single-page client
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:5173";

/// Store URL from the environment
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://feedline.db".to_string())
}

/// Token signing secret from the environment
pub fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development fallback");
        DEV_JWT_SECRET.to_string()
    })
}

/// Allowed CORS origin from the environment
pub fn client_origin() -> String {
    std::env::var("CLIENT_ORIGIN").unwrap_or_else(|_| DEFAULT_CLIENT_ORIGIN.to_string())
}

/// Port for a service, read from `var` with a default
pub fn service_port(var: &str, default: u16) -> u16 {
    std::env::var(var)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Connect to the store and apply migrations
///
/// Foreign-key enforcement is switched on for every connection; the
/// like-to-missing-post 404 mapping depends on it. A connection or
/// migration failure is fatal: neither service is useful without its
/// store.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
