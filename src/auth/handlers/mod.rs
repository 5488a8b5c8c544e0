//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Request and response types
//! ├── signup.rs    - User registration handler
//! ├── login.rs     - User authentication handler
//! ├── me.rs        - Get current user handler
//! └── password.rs  - Change password handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password → account created → JWT token returned
//! 2. **Login**: credentials verified → login bookkeeping → JWT token returned
//! 3. **Me / Change password**: Bearer token verified by the `AuthUser`
//!    extractor before the handler body runs

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// Change password handler
pub mod password;

// Re-export commonly used types
pub use types::{AuthResponse, ChangePasswordRequest, LoginRequest, SignupRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use password::change_password;
pub use signup::signup;
