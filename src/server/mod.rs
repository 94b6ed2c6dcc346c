//! Server Module
//!
//! Shared service plumbing: configuration loading, the application
//! state container, and app assembly for the two binaries.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Environment configuration and pool construction
//! └── init.rs   - Router assembly with CORS and trace layers
//! ```

/// Application state
pub mod state;

/// Configuration loading
pub mod config;

/// App assembly
pub mod init;

// Re-export commonly used types
pub use init::{create_auth_app, create_feed_app};
pub use state::AppState;
