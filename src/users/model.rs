/**
 * User Model
 *
 * This module defines the user row type and its enum columns. The hashed
 * password and secret word live only on this type and are never serialized
 * into API responses; response payloads are built from explicit DTOs.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile visibility level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_privacy", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserPrivacy {
    #[default]
    Public,
    Private,
    FriendsOnly,
}

/// Account standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
    Banned,
}

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub hashed_password: String,
    /// Secret word required for privileged operations, when set
    pub secret_word: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub timezone: String,
    pub privacy_level: UserPrivacy,
    pub status: UserStatus,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// When the password was last changed through the change workflow
    pub last_password_change: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub last_activity_at: Option<DateTime<Utc>>,
    pub registration_ip: Option<String>,
    pub last_login_ip: Option<String>,
    pub last_using_ip: Option<String>,
}

/// Input for creating a user row
///
/// Carries everything registration collects. The password arrives already
/// hashed; plaintext never crosses the store boundary.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub hashed_password: String,
    pub secret_word: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub timezone: String,
    pub privacy_level: UserPrivacy,
}

/// Allow-listed profile update
///
/// One optional field per updatable column. `None` means "leave unchanged".
/// Credential and bookkeeping columns (hashed password, id, superuser flag,
/// secret word, created/updated/last-password-change timestamps) are not
/// representable here, so they cannot be smuggled through a profile update.
#[derive(Debug, Clone, Default)]
pub struct UserProfileUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub timezone: Option<String>,
    pub privacy_level: Option<UserPrivacy>,
    pub status: Option<UserStatus>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub last_activity_at: Option<DateTime<Utc>>,
    pub last_login_ip: Option<String>,
    pub last_using_ip: Option<String>,
    pub registration_ip: Option<String>,
}

impl UserProfileUpdate {
    /// True when no field is set, meaning there is nothing to write
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone_number.is_none()
            && self.timezone.is_none()
            && self.privacy_level.is_none()
            && self.status.is_none()
            && self.last_login_at.is_none()
            && self.last_activity_at.is_none()
            && self.last_login_ip.is_none()
            && self.last_using_ip.is_none()
            && self.registration_ip.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_is_empty() {
        assert!(UserProfileUpdate::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_update_non_empty() {
        let update = UserProfileUpdate {
            timezone: Some("Europe/Berlin".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());

        let update = UserProfileUpdate {
            last_activity_at: Some(Utc::now()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_privacy_default_is_public() {
        assert_eq!(UserPrivacy::default(), UserPrivacy::Public);
        assert_eq!(UserStatus::default(), UserStatus::Active);
    }
}
