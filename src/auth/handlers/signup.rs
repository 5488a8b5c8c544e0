/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Check that the email is not already registered
 * 3. Hash the password using bcrypt
 * 4. Create the user in the database
 * 5. Record the registration address and first activity
 * 6. Generate a JWT token
 * 7. Return token and user info
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at the default cost
 * - Passwords and secret words are never returned in responses
 */

use axum::{
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use std::net::SocketAddr;

use crate::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::auth::password::hash_password;
use crate::auth::sessions::create_token;
use crate::error::ApiError;
use crate::middleware::client_ip::resolve_client_ip;
use crate::server::state::AppState;
use crate::users::model::NewUser;
use crate::users::{dao, service};

/// Validate email format (basic check)
fn is_valid_email(email: &str) -> bool {
    email.contains('@') && !email.starts_with('@') && !email.ends_with('@')
}

/// Sign up handler
///
/// Validates the input, creates the account, stamps registration
/// bookkeeping, and returns a JWT token for immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - invalid email format or password too short
/// * `409 Conflict` - a user with this email already exists
/// * `500 Internal Server Error` - hashing, persistence, or token failure
pub async fn signup(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    tracing::info!("Signup request for email: {}", request.email);

    if !is_valid_email(&request.email) {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::InvalidEmail);
    }

    service::validate_password_length(&request.password)?;

    if dao::get_user_by_email(&state.db_pool, &request.email)
        .await?
        .is_some()
    {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::EmailTaken);
    }

    let hashed_password = hash_password(&request.password)?;

    let user = dao::create_user(
        &state.db_pool,
        NewUser {
            email: request.email,
            hashed_password,
            secret_word: request.secret_word,
            first_name: request.first_name,
            last_name: request.last_name,
            phone_number: request.phone_number,
            timezone: request.timezone,
            privacy_level: request.privacy_level,
        },
    )
    .await?;

    let client_ip = resolve_client_ip(&headers, Some(peer));
    if !service::update_user_registration(&state.db_pool, user.id, client_ip).await? {
        tracing::warn!("Registration bookkeeping for user {} affected no rows", user.id);
    }

    let token = create_token(&state.auth, user.id, user.email.clone())?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(&user),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email(""));
    }
}
