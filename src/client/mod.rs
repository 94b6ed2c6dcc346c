//! Client Module
//!
//! The consumer side of the two services: a typed API client and a
//! persisted session. The session is the client-side `{token, profile}`
//! pair that drives UI gating; it survives restarts on disk and is
//! discarded wholesale when it cannot be read back.

/// Persisted session store
pub mod session;

/// Typed API client for both services
pub mod api;

pub use api::{ApiClient, ClientError};
pub use session::{Session, SessionStore};
