//! Middleware Module
//!
//! Request-lifecycle middleware shared by both services. Currently this
//! is only the auth gate, the single authorization choke point in front
//! of every protected route.

pub mod auth;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
