//! Error Module
//!
//! This module defines the application error type and its HTTP conversion.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! All handlers return `Result<_, ApiError>`. The error carries its own
//! status mapping so route code never hardcodes status codes for domain
//! failures.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
