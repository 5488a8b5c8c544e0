/**
 * Profile Handlers
 *
 * HTTP handlers for reading and updating the authenticated user's profile.
 *
 * # Endpoints
 *
 * - `GET /api/users/me` - Full profile of the current user
 * - `PATCH /api/users/me` - Partial profile update
 *
 * # Field Policy
 *
 * The update request only exposes fields a user may change about themselves.
 * Credential columns, account flags, and server-maintained timestamps are
 * not part of the request type at all, so they cannot be set through this
 * endpoint regardless of what a client sends.
 */

use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::model::{User, UserPrivacy, UserProfileUpdate, UserStatus};
use crate::users::service;

/// Profile update request
///
/// All fields optional; absent fields are left unchanged.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub timezone: Option<String>,
    pub privacy_level: Option<UserPrivacy>,
}

impl UpdateProfileRequest {
    fn into_update(self) -> UserProfileUpdate {
        UserProfileUpdate {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            timezone: self.timezone,
            privacy_level: self.privacy_level,
            ..Default::default()
        }
    }
}

/// Full profile response
///
/// Everything a user may see about their own account. Never includes the
/// password hash or secret word.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub timezone: String,
    pub privacy_level: UserPrivacy,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            timezone: user.timezone,
            privacy_level: user.privacy_level,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
            last_login_at: user.last_login_at,
            last_activity_at: user.last_activity_at,
        }
    }
}

/// Get profile handler
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = service::get_user_profile(&state.db_pool, user.user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(user.into()))
}

/// Update profile handler
///
/// # Errors
///
/// * `400 Bad Request` - the request carried no fields
/// * `404 Not Found` - the account no longer exists
/// * `500 Internal Server Error` - the write affected no rows
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let update = request.into_update();
    if update.is_empty() {
        return Err(ApiError::EmptyUpdate);
    }

    service::update_user_profile(&state.db_pool, user.user_id, &update).await?;

    tracing::info!("User {} updated their profile", user.user_id);

    let user = service::get_user_profile(&state.db_pool, user.user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_produces_empty_update() {
        let request: UpdateProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(request.into_update().is_empty());
    }

    #[test]
    fn test_request_fields_carry_over() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"first_name": "Ada", "privacy_level": "friends_only"}"#)
                .unwrap();
        let update = request.into_update();
        assert_eq!(update.first_name.as_deref(), Some("Ada"));
        assert_eq!(update.privacy_level, Some(UserPrivacy::FriendsOnly));
        assert!(update.last_login_ip.is_none());
    }
}
