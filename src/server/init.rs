/**
 * App Assembly
 *
 * Builds the final axum application for each binary: router, CORS
 * policy, and request tracing. The `*_with_state` variants take an
 * injected state so the integration suites can run the apps against
 * their own pool and secret.
 */

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{auth_router, feed_router};
use crate::server::config;
use crate::server::state::AppState;

/// Create the authentication service app from the environment
pub async fn create_auth_app() -> Result<Router, sqlx::Error> {
    Ok(auth_app_with_state(load_state().await?))
}

/// Create the post service app from the environment
pub async fn create_feed_app() -> Result<Router, sqlx::Error> {
    Ok(feed_app_with_state(load_state().await?))
}

/// Authentication service app over an injected state
pub fn auth_app_with_state(state: AppState) -> Router {
    auth_router(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Post service app over an injected state
pub fn feed_app_with_state(state: AppState) -> Router {
    feed_router(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

async fn load_state() -> Result<AppState, sqlx::Error> {
    let pool = config::connect_database(&config::database_url()).await?;
    Ok(AppState {
        pool,
        jwt_secret: config::jwt_secret(),
    })
}

/// CORS policy for the browser client
///
/// Credentials are allowed, so the origin, methods, and headers must be
/// listed explicitly rather than wildcarded.
fn cors_layer() -> CorsLayer {
    let origin = config::client_origin();
    let origin = origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        tracing::warn!("CLIENT_ORIGIN is not a valid header value, using default");
        HeaderValue::from_static(config::DEFAULT_CLIENT_ORIGIN)
    });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
