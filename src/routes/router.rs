/**
 * Router Configuration
 *
 * This module provides the main router creation function. API routes are
 * assembled first, then a request-tracing layer and a JSON 404 fallback
 * are applied, and finally the application state is attached.
 */

use axum::{http::StatusCode, response::Json, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool, auth configuration)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .fallback(not_found);

    router.with_state(app_state)
}

/// Fallback handler for unknown routes
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found", "status": 404 })),
    )
}
