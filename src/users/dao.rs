//! Database operations for users
//!
//! Plain sqlx queries over the `users` table. All writes report success as
//! "at least one row affected" so callers can distinguish a vanished user
//! from a completed update.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::users::model::{NewUser, User, UserProfileUpdate};

const USER_COLUMNS: &str = r#"
    id, email, hashed_password, secret_word, first_name, last_name,
    phone_number, timezone, privacy_level, status,
    is_active, is_superuser, is_verified,
    created_at, updated_at, last_password_change,
    last_login_at, last_activity_at,
    registration_ip, last_login_ip, last_using_ip
"#;

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new_user` - Registration data with the password already hashed
///
/// # Returns
/// Created user or error
pub async fn create_user(pool: &PgPool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (
            id, email, hashed_password, secret_word, first_name, last_name,
            phone_number, timezone, privacy_level,
            created_at, updated_at, last_password_change
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10, $10)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&new_user.email)
    .bind(&new_user.hashed_password)
    .bind(&new_user.secret_word)
    .bind(&new_user.first_name)
    .bind(&new_user.last_name)
    .bind(&new_user.phone_number)
    .bind(&new_user.timezone)
    .bind(new_user.privacy_level)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Update a user's password hash
///
/// When `touch_last_password_change` is false only the hash is rewritten.
/// That variant is used for transparent hash upgrades during verification,
/// which must not look like a user-initiated password change.
///
/// # Returns
/// True if a row was updated
pub async fn update_password(
    pool: &PgPool,
    user_id: Uuid,
    hashed_password: &str,
    touch_last_password_change: bool,
) -> Result<bool, sqlx::Error> {
    let now = Utc::now();

    let result = if touch_last_password_change {
        sqlx::query(
            r#"
            UPDATE users
            SET hashed_password = $1, last_password_change = $2, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(hashed_password)
        .bind(now)
        .bind(user_id)
        .execute(pool)
        .await?
    } else {
        sqlx::query(
            r#"
            UPDATE users
            SET hashed_password = $1, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(hashed_password)
        .bind(now)
        .bind(user_id)
        .execute(pool)
        .await?
    };

    Ok(result.rows_affected() > 0)
}

/// Apply a profile update
///
/// Unset fields keep their stored values. An update with no fields set is
/// rejected without issuing a statement.
///
/// # Returns
/// True if a row was updated, false for an empty update or missing user
pub async fn update_user_profile(
    pool: &PgPool,
    user_id: Uuid,
    update: &UserProfileUpdate,
) -> Result<bool, sqlx::Error> {
    if update.is_empty() {
        return Ok(false);
    }

    let result = sqlx::query(
        r#"
        UPDATE users
        SET email            = COALESCE($2, email),
            first_name       = COALESCE($3, first_name),
            last_name        = COALESCE($4, last_name),
            phone_number     = COALESCE($5, phone_number),
            timezone         = COALESCE($6, timezone),
            privacy_level    = COALESCE($7, privacy_level),
            status           = COALESCE($8, status),
            last_login_at    = COALESCE($9, last_login_at),
            last_activity_at = COALESCE($10, last_activity_at),
            last_login_ip    = COALESCE($11, last_login_ip),
            last_using_ip    = COALESCE($12, last_using_ip),
            registration_ip  = COALESCE($13, registration_ip),
            updated_at       = $14
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(&update.email)
    .bind(&update.first_name)
    .bind(&update.last_name)
    .bind(&update.phone_number)
    .bind(&update.timezone)
    .bind(update.privacy_level)
    .bind(update.status)
    .bind(update.last_login_at)
    .bind(update.last_activity_at)
    .bind(&update.last_login_ip)
    .bind(&update.last_using_ip)
    .bind(&update.registration_ip)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Stamp the user's last activity timestamp
pub async fn update_last_activity(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET last_activity_at = $1 WHERE id = $2")
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
