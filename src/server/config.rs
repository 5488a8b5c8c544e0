/**
 * Server Configuration
 *
 * This module loads configuration from the environment once at startup and
 * materializes it into plain structs. Everything downstream receives these
 * by reference through application state; no other module reads environment
 * variables or process-wide globals.
 */

use sqlx::PgPool;

/// Default token lifetime: 30 days
const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Authentication configuration
///
/// Built once at startup and carried in `AppState`. Holds the JWT signing
/// secret and the issued-token lifetime.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Secret used to sign and verify JWT tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens, in seconds
    pub token_ttl_secs: u64,
}

/// Load authentication configuration from the environment
///
/// Reads `JWT_SECRET` and `TOKEN_TTL_SECS`. A missing secret falls back to
/// a development default with a loud warning; production deployments must
/// set their own.
pub fn load_auth_config() -> AuthConfig {
    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development default");
        "change-me-in-production".to_string()
    });

    let token_ttl_secs = std::env::var("TOKEN_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

    AuthConfig {
        jwt_secret,
        token_ttl_secs,
    }
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// Unlike optional integrations, the database is required: every endpoint
/// touches it, so a missing or unreachable database fails startup instead
/// of producing a server that errors on every request.
pub async fn load_database() -> Result<PgPool, Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL is not set")?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_token_ttl_is_thirty_days() {
        assert_eq!(DEFAULT_TOKEN_TTL_SECS, 2_592_000);
    }
}
