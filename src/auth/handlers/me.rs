/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::dao;

/// Get current user handler
///
/// Authentication happens in the `AuthUser` extractor; by the time this
/// body runs the token has been verified and the account confirmed live.
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token
/// * `404 Not Found` - account removed between extraction and lookup
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = dao::get_user_by_id(&state.db_pool, user.user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(UserResponse::from(&user)))
}
