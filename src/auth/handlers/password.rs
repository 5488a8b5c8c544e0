/**
 * Change Password Handler
 *
 * This module implements the handler for POST /api/auth/change-password.
 * The workflow itself lives in the user service; this handler only binds
 * the authenticated caller to it and shapes the response.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{ChangePasswordRequest, ChangePasswordResponse};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::service;

/// Change password handler
///
/// # Errors
///
/// * `400 Bad Request` - wrong current password, failed secret-word gate,
///   or rejected new password
/// * `404 Not Found` - account no longer exists
/// * `500 Internal Server Error` - the final write affected no rows
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<ChangePasswordResponse>, ApiError> {
    service::change_password(
        &state.db_pool,
        user.user_id,
        &request.current_password,
        &request.new_password,
        request.secret_word.as_deref(),
    )
    .await?;

    Ok(Json(ChangePasswordResponse {
        message: "Password updated successfully".to_string(),
        password_changed: true,
    }))
}
