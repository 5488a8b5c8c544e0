/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. These types are shared across signup, login,
 * me, and change-password handlers.
 */

use serde::{Deserialize, Serialize};

use crate::users::model::UserPrivacy;

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Sign up request
///
/// Email and password are required; everything else is optional profile
/// data collected at registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// Secret word gating privileged operations; immutable once set
    pub secret_word: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub privacy_level: UserPrivacy,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against the stored hash)
    pub password: String,
}

/// Change password request
#[derive(Deserialize, Serialize, Debug)]
pub struct ChangePasswordRequest {
    /// Current password
    pub current_password: String,
    /// New password
    pub new_password: String,
    /// Secret word, required when the account has one set
    pub secret_word: Option<String>,
}

/// Change password response
#[derive(Serialize, Deserialize, Debug)]
pub struct ChangePasswordResponse {
    pub message: String,
    pub password_changed: bool,
}

/// Auth response
///
/// Returned by signup and login handlers. Contains the JWT token and user
/// information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's email address
    pub email: String,
}

impl From<&crate::users::model::User> for UserResponse {
    fn from(user: &crate::users::model::User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_defaults() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"email": "a@b.c", "password": "password123"}"#).unwrap();
        assert_eq!(request.timezone, "UTC");
        assert_eq!(request.privacy_level, UserPrivacy::Public);
        assert!(request.secret_word.is_none());
    }

    #[test]
    fn test_change_password_secret_word_optional() {
        let request: ChangePasswordRequest = serde_json::from_str(
            r#"{"current_password": "old-password", "new_password": "new-password"}"#,
        )
        .unwrap();
        assert!(request.secret_word.is_none());
    }
}
