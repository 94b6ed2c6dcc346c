/**
 * Application State
 *
 * Both services share the same state shape: the store handle and the
 * token-signing secret, injected at construction so tests can run the
 * routers against their own pool and secret without global state.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// State container handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Store connection pool
    pub pool: SqlitePool,
    /// Symmetric secret the token codec signs and verifies with; both
    /// services must be configured with the same value
    pub jwt_secret: String,
}

/// Allow handlers to extract the pool directly when the full state is
/// not needed.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}
