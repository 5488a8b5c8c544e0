/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * `PgPool` is internally reference-counted and `AuthConfig` is cloned per
 * extraction, so `AppState` is cheap to clone and safe to share across
 * request handlers.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::server::config::AuthConfig;

/// Application state shared by all request handlers
///
/// # Fields
///
/// * `db_pool` - PostgreSQL connection pool
/// * `auth` - JWT signing configuration, built once at startup
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,

    /// Authentication configuration (signing secret, token lifetime)
    pub auth: AuthConfig,
}

/// Allow handlers to extract the pool directly with `State(pool)`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract auth configuration directly
impl FromRef<AppState> for AuthConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
