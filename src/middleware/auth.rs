/**
 * Authentication Extractor
 *
 * This module protects routes that require a signed-in user. The `AuthUser`
 * extractor:
 *
 * 1. Extracts the JWT from the Authorization header ("Bearer <token>")
 * 2. Verifies the token signature and expiry
 * 3. Parses the user ID from the token claims
 * 4. Confirms the user still exists in the database
 * 5. Stamps the user's last-activity timestamp
 *
 * Any handler that takes an `AuthUser` parameter is therefore unreachable
 * without a valid token for a live account.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::{dao, service};

/// Authenticated user data extracted from a JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Axum extractor for the authenticated user
///
/// Use as a handler parameter to require authentication:
///
/// ```ignore
/// async fn handler(AuthUser(user): AuthUser) { /* user.user_id is valid */ }
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                ApiError::Unauthenticated
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            ApiError::Unauthenticated
        })?;

        let claims = verify_token(&state.auth, token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            ApiError::Unauthenticated
        })?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
            tracing::warn!("Invalid user ID in token: {:?}", e);
            ApiError::Unauthenticated
        })?;

        // A token may outlive its account; reject tokens for deleted users
        verify_user_exists(&state.db_pool, user_id).await?;

        // Every authenticated request counts as activity. A failed stamp is
        // logged but never blocks the request itself.
        if let Err(e) = service::record_user_activity(&state.db_pool, user_id).await {
            tracing::warn!("Failed to record activity for user {}: {:?}", user_id, e);
        }

        Ok(AuthUser(AuthenticatedUser {
            user_id,
            email: claims.email,
        }))
    }
}

/// Verify user exists in database
async fn verify_user_exists(pool: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
    match dao::get_user_by_id(pool, user_id).await? {
        Some(_) => Ok(()),
        None => {
            tracing::warn!("Token presented for missing user {}", user_id);
            Err(ApiError::Unauthenticated)
        }
    }
}
