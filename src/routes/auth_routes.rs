/**
 * Identity Surface Routes
 *
 * Assembles the authentication service router: a public login endpoint
 * and a gated profile endpoint.
 */

use axum::{middleware, routing, Router};

use crate::auth::handlers::{get_profile, login};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;

/// Build the authentication service router
///
/// `/profile` is wrapped with the auth gate; `/login` is reachable
/// without credentials.
pub fn auth_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/profile", routing::get(get_profile))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/login", routing::post(login))
        .merge(protected)
        .with_state(state)
}
