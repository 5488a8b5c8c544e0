//! Posts Module
//!
//! Post storage, ownership enforcement, and HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs       - Module exports
//! ├── model.rs     - Post row type
//! ├── dao.rs       - Database operations and ownership checks
//! ├── types.rs     - Request/response types
//! └── handlers.rs  - HTTP handlers
//! ```
//!
//! Ownership is enforced in the data-access layer: update and delete load
//! the post first and refuse to touch rows owned by another user, so no
//! handler can bypass the check.

/// Post row type
pub mod model;

/// Database operations for posts
pub mod dao;

/// Request and response types
pub mod types;

/// HTTP handlers for post endpoints
pub mod handlers;

// Re-export commonly used types
pub use dao::UpdatePostOutcome;
pub use model::Post;
