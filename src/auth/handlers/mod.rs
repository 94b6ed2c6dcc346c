//! Identity Surface Handlers
//!
//! HTTP handlers for the authentication service.
//!
//! # Handlers
//!
//! - **`login`** - POST /login - credential check and token issuance
//! - **`get_profile`** - GET /profile - the caller's own profile
//!
//! `/profile` sits behind the auth gate; `/login` is public.

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Own-profile handler
pub mod profile;

// Re-export handlers
pub use login::login;
pub use profile::get_profile;
