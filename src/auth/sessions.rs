/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * The signing secret and token lifetime come from an `AuthConfig` built once
 * at startup and carried in application state, so nothing here reads the
 * environment or process-wide globals.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::server::config::AuthConfig;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `config` - Auth configuration (signing secret, token lifetime)
/// * `user_id` - User ID (UUID)
/// * `email` - User email
///
/// # Returns
/// JWT token string
pub fn create_token(
    config: &AuthConfig,
    user_id: Uuid,
    email: String,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        email,
        exp: now + config.token_ttl_secs,
        iat: now,
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a JWT token
///
/// # Arguments
/// * `config` - Auth configuration (signing secret)
/// * `token` - JWT token string
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(
    config: &AuthConfig,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_secs: 3600,
        }
    }

    #[test]
    fn test_create_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(&test_config(), user_id, "test@example.com".to_string());
        assert!(token.is_ok());
        assert!(!token.unwrap().is_empty());
    }

    #[test]
    fn test_verify_token() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let token = create_token(&config, user_id, "test@example.com".to_string()).unwrap();

        let claims = verify_token(&config, &token).unwrap();
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_invalid_token() {
        let result = verify_token(&test_config(), "invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let user_id = Uuid::new_v4();
        let token = create_token(&test_config(), user_id, "test@example.com".to_string()).unwrap();

        let other = AuthConfig {
            jwt_secret: "another-secret".to_string(),
            token_ttl_secs: 3600,
        };
        assert!(verify_token(&other, &token).is_err());
    }
}
