//! Authentication Module
//!
//! This module handles credentials and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports
//! ├── password.rs  - bcrypt hashing and verify-with-upgrade
//! ├── sessions.rs  - JWT token generation and validation
//! └── handlers/    - HTTP handlers for auth endpoints
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt; verification transparently upgrades
//!   hashes created at an older, weaker cost
//! - JWT tokens are signed with a secret from `AuthConfig`, built once at
//!   startup and carried in application state
//! - Failed logins return a single undifferentiated error

/// Password hashing and verification
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{change_password, get_me, login, signup};
pub use sessions::{create_token, verify_token, Claims};
