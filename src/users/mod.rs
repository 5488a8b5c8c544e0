//! Users Module
//!
//! User persistence, the credential lifecycle, and profile handlers.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs       - Module exports
//! ├── model.rs     - User row type, enums, update struct
//! ├── dao.rs       - Database operations
//! ├── service.rs   - Password change workflow, activity tracking
//! └── handlers.rs  - Profile HTTP handlers
//! ```
//!
//! The service layer owns every credential decision: password verification
//! with transparent hash upgrades, the secret-word gate, and new-password
//! validation. Handlers and middleware only ever call the service, never
//! bcrypt directly.

/// User row type and update structs
pub mod model;

/// Database operations for users
pub mod dao;

/// Credential lifecycle and activity tracking
pub mod service;

/// Profile HTTP handlers
pub mod handlers;

// Re-export commonly used types
pub use model::{NewUser, User, UserPrivacy, UserProfileUpdate, UserStatus};
