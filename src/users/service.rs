/**
 * User Service
 *
 * Credential lifecycle and activity tracking on top of the user DAO.
 *
 * # Password Change Workflow
 *
 * `change_password` runs a fixed gate sequence, aborting on the first
 * failure:
 *
 * 1. Look up the user (missing user is a 404, not a credential failure)
 * 2. Verify the current password, upgrading a weak stored hash on the way
 * 3. Check the secret word when the account has one
 * 4. Reject a new password that is unchanged or too short
 * 5. Hash and persist the new password, stamping last_password_change
 *
 * The hash upgrade in step 2 is persisted immediately and independently of
 * whether the overall change succeeds. Both the old and the upgraded hash
 * verify the same plaintext, so a failure later in the sequence leaves the
 * account in a valid state.
 */

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::password;
use crate::error::ApiError;
use crate::users::dao;
use crate::users::model::{User, UserProfileUpdate};

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// Verify a password against the user's stored hash
///
/// When the password matches and the stored hash predates the current cost
/// settings, the hash is rewritten in place. The rewrite deliberately leaves
/// `last_password_change` alone: the credential itself did not change.
pub async fn verify_password(
    pool: &PgPool,
    user: &User,
    password_input: &str,
) -> Result<bool, ApiError> {
    let (matched, upgraded) = password::verify_and_upgrade(password_input, &user.hashed_password)?;

    if matched {
        if let Some(new_hash) = upgraded {
            tracing::info!("Upgrading stored password hash for user {}", user.id);
            if !dao::update_password(pool, user.id, &new_hash, false).await? {
                tracing::warn!("Hash upgrade for user {} affected no rows", user.id);
            }
        }
    }

    Ok(matched)
}

/// Check the secret word gate for a privileged operation
///
/// Accounts without a secret word pass unconditionally. For accounts that
/// have one, the input must be present and match exactly, including case.
pub fn validate_secret_word(user: &User, secret_word: Option<&str>) -> Result<(), ApiError> {
    let Some(stored) = user.secret_word.as_deref() else {
        return Ok(());
    };

    match secret_word {
        None | Some("") => Err(ApiError::SecretWordRequired),
        Some(input) if input != stored => Err(ApiError::SecretWordIncorrect),
        Some(_) => Ok(()),
    }
}

/// Check that a proposed password meets the length requirement
pub fn validate_password_length(new_password: &str) -> Result<(), ApiError> {
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::PasswordTooShort);
    }
    Ok(())
}

/// Validate a proposed new password for a user
///
/// Rejects a password identical to the current one (detected by verifying it
/// against the stored hash) and anything below the minimum length.
pub async fn validate_new_password(
    pool: &PgPool,
    user: &User,
    new_password: &str,
) -> Result<(), ApiError> {
    if verify_password(pool, user, new_password).await? {
        return Err(ApiError::PasswordUnchanged);
    }
    validate_password_length(new_password)
}

/// Change a user's password
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user_id` - User ID
/// * `current_password` - Current plaintext password
/// * `new_password` - New plaintext password
/// * `secret_word` - Secret word, required when the account has one set
///
/// # Errors
///
/// * `UserNotFound` - no such user
/// * `CurrentPasswordIncorrect` - current password does not verify
/// * `SecretWordRequired` / `SecretWordIncorrect` - secret word gate failed
/// * `PasswordUnchanged` / `PasswordTooShort` - new password rejected
/// * `PasswordUpdateFailed` - the final write affected no rows
pub async fn change_password(
    pool: &PgPool,
    user_id: Uuid,
    current_password: &str,
    new_password: &str,
    secret_word: Option<&str>,
) -> Result<(), ApiError> {
    let user = dao::get_user_by_id(pool, user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    if !verify_password(pool, &user, current_password).await? {
        tracing::warn!("Password change rejected for user {}: bad current password", user_id);
        return Err(ApiError::CurrentPasswordIncorrect);
    }

    validate_secret_word(&user, secret_word)?;

    validate_new_password(pool, &user, new_password).await?;

    let hashed_password = password::hash_password(new_password)?;

    let updated = dao::update_password(pool, user_id, &hashed_password, true).await?;
    if !updated {
        return Err(ApiError::PasswordUpdateFailed);
    }

    tracing::info!("Password changed for user {}", user_id);
    Ok(())
}

/// Get a user's profile by id
pub async fn get_user_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, ApiError> {
    Ok(dao::get_user_by_id(pool, user_id).await?)
}

/// Apply a profile update for a user
///
/// The caller is expected to reject empty updates up front; an update that
/// reaches the store and still affects no rows is a persistence failure.
pub async fn update_user_profile(
    pool: &PgPool,
    user_id: Uuid,
    update: &UserProfileUpdate,
) -> Result<(), ApiError> {
    if dao::get_user_by_id(pool, user_id).await?.is_none() {
        return Err(ApiError::UserNotFound);
    }

    if !dao::update_user_profile(pool, user_id, update).await? {
        return Err(ApiError::ProfileUpdateFailed);
    }

    Ok(())
}

/// Record user activity
///
/// Unconditionally stamps `last_activity_at` with the current time.
pub async fn record_user_activity(pool: &PgPool, user_id: Uuid) -> Result<bool, ApiError> {
    Ok(dao::update_last_activity(pool, user_id).await?)
}

/// Stamp login bookkeeping after a successful authentication
///
/// Updates `last_login_at` and `last_activity_at`; when the client address
/// could be resolved, also `last_login_ip` and `last_using_ip`.
pub async fn update_user_last_login(
    pool: &PgPool,
    user_id: Uuid,
    client_ip: Option<String>,
) -> Result<bool, ApiError> {
    let now = Utc::now();
    let update = UserProfileUpdate {
        last_login_at: Some(now),
        last_activity_at: Some(now),
        last_login_ip: client_ip.clone(),
        last_using_ip: client_ip,
        ..Default::default()
    };

    Ok(dao::update_user_profile(pool, user_id, &update).await?)
}

/// Stamp registration bookkeeping for a freshly created account
///
/// Records first activity and, when available, the registering address as
/// both `registration_ip` and `last_using_ip`.
pub async fn update_user_registration(
    pool: &PgPool,
    user_id: Uuid,
    client_ip: Option<String>,
) -> Result<bool, ApiError> {
    let update = UserProfileUpdate {
        last_activity_at: Some(Utc::now()),
        last_using_ip: client_ip.clone(),
        registration_ip: client_ip,
        ..Default::default()
    };

    Ok(dao::update_user_profile(pool, user_id, &update).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;
    use crate::users::model::{UserPrivacy, UserStatus};

    fn test_user(secret_word: Option<&str>) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            // bcrypt hash of "password123" at cost 4, fixed so tests do not
            // pay hashing cost on every construction
            hashed_password: bcrypt::hash("password123", 4).unwrap(),
            secret_word: secret_word.map(|s| s.to_string()),
            first_name: None,
            last_name: None,
            phone_number: None,
            timezone: "UTC".to_string(),
            privacy_level: UserPrivacy::Public,
            status: UserStatus::Active,
            is_active: true,
            is_superuser: false,
            is_verified: false,
            created_at: now,
            updated_at: now,
            last_password_change: Some(now),
            last_login_at: None,
            last_activity_at: None,
            registration_ip: None,
            last_login_ip: None,
            last_using_ip: None,
        }
    }

    #[test]
    fn test_secret_word_skipped_when_not_set() {
        let user = test_user(None);
        assert!(validate_secret_word(&user, None).is_ok());
        assert!(validate_secret_word(&user, Some("anything")).is_ok());
    }

    #[test]
    fn test_secret_word_required_when_set() {
        let user = test_user(Some("tiramisu"));
        assert_matches!(
            validate_secret_word(&user, None),
            Err(ApiError::SecretWordRequired)
        );
        assert_matches!(
            validate_secret_word(&user, Some("")),
            Err(ApiError::SecretWordRequired)
        );
    }

    #[test]
    fn test_secret_word_mismatch_rejected() {
        let user = test_user(Some("tiramisu"));
        assert_matches!(
            validate_secret_word(&user, Some("panettone")),
            Err(ApiError::SecretWordIncorrect)
        );
    }

    #[test]
    fn test_secret_word_is_case_sensitive() {
        let user = test_user(Some("Tiramisu"));
        assert_matches!(
            validate_secret_word(&user, Some("tiramisu")),
            Err(ApiError::SecretWordIncorrect)
        );
        assert!(validate_secret_word(&user, Some("Tiramisu")).is_ok());
    }

    #[test]
    fn test_password_length_gate() {
        assert_matches!(
            validate_password_length("short"),
            Err(ApiError::PasswordTooShort)
        );
        assert_matches!(
            validate_password_length("1234567"),
            Err(ApiError::PasswordTooShort)
        );
        assert!(validate_password_length("12345678").is_ok());
    }

    #[test]
    fn test_password_length_counts_characters_not_bytes() {
        // Eight two-byte characters pass even though the check would fail
        // if it measured bytes incorrectly the other way around.
        assert!(validate_password_length("éééééééé").is_ok());
        assert_matches!(
            validate_password_length("ééééééé"),
            Err(ApiError::PasswordTooShort)
        );
    }

    #[test]
    fn test_unchanged_password_detected_by_verifier() {
        // The unchanged-password rule compares plaintext against the stored
        // hash, exactly as the verifier does during step 2.
        let user = test_user(None);
        let (matched, _) =
            password::verify_and_upgrade("password123", &user.hashed_password).unwrap();
        assert!(matched);

        let (matched, _) =
            password::verify_and_upgrade("different-password", &user.hashed_password).unwrap();
        assert!(!matched);
    }
}
