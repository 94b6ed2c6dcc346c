//! Feed Module
//!
//! The post service's domain: creating posts, listing the feed with
//! author display data and like counts, and recording likes
//! idempotently.
//!
//! # Module Structure
//!
//! ```text
//! feed/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Post/like store queries
//! └── handlers.rs - HTTP handlers and wire types
//! ```
//!
//! The like path is the one place with a real concurrency contract:
//! correctness under concurrent double-likes is delegated to the store's
//! atomic conditional insert on the (post, user) primary key. The
//! service layer never checks-then-inserts.

/// Post and like store queries
pub mod db;

/// HTTP handlers for the feed surface
pub mod handlers;

pub use handlers::{create_post, like_post, list_posts, service_status};
