//! Flocknet - Main Library
//!
//! Flocknet is a small social-network backend built with Rust. It exposes
//! user registration and authentication plus post CRUD over HTTP, backed by
//! PostgreSQL.
//!
//! # Module Structure
//!
//! - **`server`** - Axum server setup, application state, configuration
//! - **`routes`** - HTTP route assembly
//! - **`auth`** - Password hashing, JWT sessions, auth endpoint handlers
//! - **`users`** - User storage, credential lifecycle, profile handlers
//! - **`posts`** - Post storage, ownership enforcement, post handlers
//! - **`middleware`** - Authenticated-user extractor, client IP resolution
//! - **`error`** - Application error type and HTTP conversion
//!
//! # Architecture
//!
//! Handlers are thin: they validate input shape, then delegate to the user
//! service or the DAOs. Domain decisions (credential checks, ownership)
//! live below the HTTP layer so they hold no matter which endpoint reaches
//! them. All state a request needs travels in `AppState`; there are no
//! process-wide singletons.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and session management
pub mod auth;

/// User storage and credential lifecycle
pub mod users;

/// Post storage and handlers
pub mod posts;

/// Request-processing middleware
pub mod middleware;

/// Application error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState};
