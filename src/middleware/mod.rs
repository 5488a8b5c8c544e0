//! Middleware Module
//!
//! Request-processing helpers shared by the HTTP handlers.
//!
//! - **`auth`** - Authenticated-user extractor for protected routes
//! - **`client_ip`** - Client address resolution behind reverse proxies

pub mod auth;

pub mod client_ip;

pub use auth::{AuthUser, AuthenticatedUser};
pub use client_ip::resolve_client_ip;
