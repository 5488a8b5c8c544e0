//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs       - Module exports
//! ├── state.rs     - AppState and FromRef implementations
//! ├── config.rs    - Environment loading (database, auth)
//! └── init.rs      - App creation
//! ```
//!
//! Configuration is read from the environment exactly once, at startup, and
//! carried through `AppState`. Handlers never consult the environment.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AuthConfig;
pub use init::create_app;
pub use state::AppState;
