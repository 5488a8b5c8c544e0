/**
 * API Error Types
 *
 * This module defines the error type used across handlers, services, and
 * data-access code. Each variant maps to a single HTTP status code so the
 * routing layer can translate domain failures without inspecting messages.
 *
 * # Error Categories
 *
 * - Lookup failures (user or post absent) map to 404
 * - Credential and validation failures map to 400
 * - Duplicate registration maps to 409
 * - Missing or invalid authentication maps to 401
 * - Persistence and library failures map to 500
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Application error type
///
/// Returned by services and handlers. Implements `IntoResponse` (see the
/// `conversion` module) so handlers can return it directly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No user row for the given id
    #[error("User not found")]
    UserNotFound,

    /// No post row for the given id
    #[error("Post not found")]
    PostNotFound,

    /// Login failed: unknown email, wrong password, or disabled account
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Password change refused: the supplied current password does not match
    #[error("Current password is incorrect")]
    CurrentPasswordIncorrect,

    /// The account has a secret word set and none was supplied
    #[error("Secret word is required for this account")]
    SecretWordRequired,

    /// The supplied secret word does not match the stored one
    #[error("Secret word is incorrect")]
    SecretWordIncorrect,

    /// The new password is identical to the current one
    #[error("New password must be different from your current password")]
    PasswordUnchanged,

    /// The new password is below the minimum length
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    /// Registration input failed the email format check
    #[error("Invalid email format")]
    InvalidEmail,

    /// Post title empty or over the column limit
    #[error("Title must be between 1 and 255 characters")]
    InvalidTitle,

    /// Profile update carried no updatable fields
    #[error("No profile fields to update")]
    EmptyUpdate,

    /// Post mutation attempted by a non-owner
    #[error("You can only modify your own posts")]
    PostAccessDenied,

    /// Post deletion refused: missing post or non-owner caller
    #[error("Post could not be deleted")]
    PostDeleteRefused,

    /// Registration with an email that is already taken
    #[error("Email already registered")]
    EmailTaken,

    /// Missing, malformed, or expired bearer token
    #[error("Invalid or missing authentication token")]
    Unauthenticated,

    /// Password write affected no rows
    #[error("Failed to update password")]
    PasswordUpdateFailed,

    /// Profile write affected no rows
    #[error("Failed to update profile")]
    ProfileUpdateFailed,

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt hashing or verification failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// JWT encoding failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - Lookup failures return 404
    /// - Validation and authorization failures return 400
    /// - Duplicate email returns 409
    /// - Authentication failures return 401
    /// - Everything else is a server-side failure and returns 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotFound | Self::PostNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials
            | Self::CurrentPasswordIncorrect
            | Self::SecretWordRequired
            | Self::SecretWordIncorrect
            | Self::PasswordUnchanged
            | Self::PasswordTooShort
            | Self::InvalidEmail
            | Self::InvalidTitle
            | Self::EmptyUpdate
            | Self::PostAccessDenied
            | Self::PostDeleteRefused => StatusCode::BAD_REQUEST,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::PasswordUpdateFailed
            | Self::ProfileUpdateFailed
            | Self::Database(_)
            | Self::PasswordHash(_)
            | Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message exposed to API clients
    ///
    /// Library errors are logged in full where they occur but surface here
    /// as a generic message so internal details never reach clients.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_failures_map_to_not_found() {
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::PostNotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_failures_map_to_bad_request() {
        let errors = [
            ApiError::CurrentPasswordIncorrect,
            ApiError::SecretWordRequired,
            ApiError::SecretWordIncorrect,
            ApiError::PasswordUnchanged,
            ApiError::PasswordTooShort,
            ApiError::EmptyUpdate,
            ApiError::PostAccessDenied,
        ];
        for error in errors {
            assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_conflict_and_auth_mapping() {
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_persistence_failures_map_to_server_error() {
        assert_eq!(
            ApiError::PasswordUpdateFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_message_is_sanitized() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_validation_message_is_preserved() {
        assert_eq!(
            ApiError::SecretWordIncorrect.message(),
            "Secret word is incorrect"
        );
    }
}
