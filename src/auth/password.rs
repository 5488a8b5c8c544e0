/**
 * Password Hashing and Verification
 *
 * This module wraps bcrypt for credential checks. Verification reports, in
 * addition to the match result, whether the stored hash was produced with a
 * weaker cost factor than the current default. Callers persist the returned
 * replacement hash so old hashes are upgraded transparently on successful
 * verification.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password at the current default cost
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a plaintext password against a stored bcrypt hash
///
/// # Returns
///
/// `(matched, upgraded_hash)`. When the password matches and the stored hash
/// uses a cost below the current default, `upgraded_hash` contains a fresh
/// hash of the same password at the default cost. On a mismatch no upgrade
/// is ever produced.
pub fn verify_and_upgrade(
    password: &str,
    stored_hash: &str,
) -> Result<(bool, Option<String>), BcryptError> {
    let matched = verify(password, stored_hash)?;
    if !matched {
        return Ok((false, None));
    }

    let upgraded = match hash_cost(stored_hash) {
        Some(cost) if cost < DEFAULT_COST => Some(hash(password, DEFAULT_COST)?),
        _ => None,
    };

    Ok((true, upgraded))
}

/// Extract the cost factor from a modular-crypt bcrypt hash
///
/// Hashes look like `$2b$12$<salt+digest>`. Returns `None` when the string
/// does not carry a parseable cost field.
fn hash_cost(stored_hash: &str) -> Option<u32> {
    stored_hash.split('$').nth(2)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost, used so tests do not pay the default-cost price
    // for every hash.
    const LOW_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hashed = hash_password("correct horse battery staple").unwrap();
        let (matched, _) = verify_and_upgrade("correct horse battery staple", &hashed).unwrap();
        assert!(matched);
    }

    #[test]
    fn test_wrong_password_does_not_match() {
        let hashed = hash("password123", LOW_COST).unwrap();
        let (matched, upgraded) = verify_and_upgrade("password124", &hashed).unwrap();
        assert!(!matched);
        assert!(upgraded.is_none());
    }

    #[test]
    fn test_low_cost_hash_is_upgraded_on_match() {
        let hashed = hash("password123", LOW_COST).unwrap();
        let (matched, upgraded) = verify_and_upgrade("password123", &hashed).unwrap();
        assert!(matched);

        let upgraded = upgraded.expect("low-cost hash should be upgraded");
        assert_eq!(hash_cost(&upgraded), Some(DEFAULT_COST));
        assert!(verify("password123", &upgraded).unwrap());
    }

    #[test]
    fn test_default_cost_hash_is_not_upgraded() {
        let hashed = hash_password("password123").unwrap();
        let (matched, upgraded) = verify_and_upgrade("password123", &hashed).unwrap();
        assert!(matched);
        assert!(upgraded.is_none());
    }

    #[test]
    fn test_hash_cost_parsing() {
        assert_eq!(
            hash_cost("$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW"),
            Some(12)
        );
        assert_eq!(hash_cost("not-a-bcrypt-hash"), None);
        assert_eq!(hash_cost(""), None);
    }
}
