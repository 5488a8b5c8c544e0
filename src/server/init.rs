/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Load authentication configuration
 * 3. Build application state
 * 4. Create and configure the router
 *
 * A database failure aborts startup; the server has no degraded mode.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::{load_auth_config, load_database};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests, or the configuration or
/// database error that prevented startup
pub async fn create_app() -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Initializing flocknet backend server");

    let db_pool = load_database().await?;
    let auth = load_auth_config();

    let app_state = AppState { db_pool, auth };

    tracing::info!("Router configured");

    Ok(create_router(app_state))
}
