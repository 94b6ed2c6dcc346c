//! Route Configuration Module
//!
//! Router assembly for the two HTTP surfaces. Each service gets its own
//! router; protected routes are wrapped with the auth gate via
//! `route_layer`, so the gate runs to completion before any handler.
//!
//! # Routes
//!
//! ## Identity surface
//!
//! - `POST /login` - public
//! - `GET /profile` - protected
//!
//! ## Feed surface
//!
//! - `GET /` - public liveness message
//! - `POST /posts` - protected
//! - `GET /posts` - protected
//! - `POST /posts/{post_id}/like` - protected

/// Identity surface router
pub mod auth_routes;

/// Feed surface router
pub mod feed_routes;

pub use auth_routes::auth_router;
pub use feed_routes::feed_router;
