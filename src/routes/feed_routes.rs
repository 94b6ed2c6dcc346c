/**
 * Feed Surface Routes
 *
 * Assembles the post service router. Every feed operation requires a
 * verified bearer token; only the liveness message at the root is
 * public.
 */

use axum::{middleware, routing, Router};

use crate::feed::handlers::{create_post, like_post, list_posts, service_status};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;

/// Build the post service router
pub fn feed_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/posts", routing::post(create_post).get(list_posts))
        .route("/posts/{post_id}/like", routing::post(like_post))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/", routing::get(service_status))
        .merge(protected)
        .with_state(state)
}
