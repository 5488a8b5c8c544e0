/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Refuse disabled accounts
 * 3. Verify the password (upgrading a weak stored hash on success)
 * 4. Stamp last-login timestamps and addresses
 * 5. Generate a JWT token and return it with user info
 *
 * # Security
 *
 * - Unknown email, wrong password, and disabled account all produce the
 *   same response, so the endpoint does not leak which accounts exist
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    response::Json,
};
use std::net::SocketAddr;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::error::ApiError;
use crate::middleware::client_ip::resolve_client_ip;
use crate::server::state::AppState;
use crate::users::{dao, service};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - unknown email, wrong password, or disabled account
/// * `500 Internal Server Error` - database or token failure
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = dao::get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            ApiError::InvalidCredentials
        })?;

    if !user.is_active {
        tracing::warn!("Login attempt for disabled account: {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    if !service::verify_password(&state.db_pool, &user, &request.password).await? {
        tracing::warn!("Invalid password for user: {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    let client_ip = resolve_client_ip(&headers, Some(peer));
    if !service::update_user_last_login(&state.db_pool, user.id, client_ip).await? {
        tracing::warn!("Login bookkeeping for user {} affected no rows", user.id);
    }

    let token = create_token(&state.auth, user.id, user.email.clone())?;

    tracing::info!("User logged in successfully: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
