//! Authentication Module
//!
//! This module owns the identity side of the system: credential
//! verification, bearer-token issuance, and the caller's own profile.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and store queries
//! ├── tokens.rs       - Token codec (issue / verify)
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - Credential check and token issuance
//!     └── profile.rs  - Own-profile fetch
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: username + password → bcrypt verification → signed token
//! 2. **Protected request**: token verified by the auth gate → user id
//!    attached to the request → handler runs
//! 3. **Profile**: attached user id → store lookup → profile response
//!
//! # Security
//!
//! - Passwords are stored as bcrypt hashes and never returned
//! - Unknown username and wrong password produce the same 401 response,
//!   so usernames cannot be enumerated through the login endpoint
//! - Tokens expire one hour after issuance and are never revoked

/// User model and store queries
pub mod users;

/// Token codec
pub mod tokens;

/// HTTP handlers for the identity surface
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, ProfileResponse};
pub use handlers::{get_profile, login};
