//! Feedline - Main Library
//!
//! Feedline is a minimal two-service social feed: an authentication
//! service that issues bearer tokens, and a post service with
//! create/list/like operations gated by those tokens, plus the client
//! pieces that consume them.
//!
//! # Overview
//!
//! The library provides:
//! - A stateless token codec (HS256 JWT, 1-hour expiry)
//! - An auth gate middleware attributing every protected request
//! - Identity handlers (login, own profile)
//! - Feed handlers (create post, list posts, idempotent like)
//! - A persisted client session and a typed API client
//!
//! # Module Structure
//!
//! - **`auth`** - token codec, user queries, identity handlers
//! - **`feed`** - post/like queries and feed handlers
//! - **`middleware`** - the auth gate
//! - **`routes`** - per-service router assembly
//! - **`server`** - configuration, state, app assembly
//! - **`error`** - shared error taxonomy and response boundary
//! - **`client`** - session store and API client
//!
//! # Binaries
//!
//! Two service binaries (`auth-service`, `post-service`) are built from
//! this library and share one SQLite store and one `JWT_SECRET`, so a
//! token issued by the first verifies at the second. A third binary
//! (`seed`) loads demo data.

/// Authentication: tokens, users, identity handlers
pub mod auth;

/// Client-side session store and API client
pub mod client;

/// Shared error taxonomy
pub mod error;

/// Feed: posts, likes, feed handlers
pub mod feed;

/// Request middleware (auth gate)
pub mod middleware;

/// Router assembly per service
pub mod routes;

/// Configuration, state, and app assembly
pub mod server;
