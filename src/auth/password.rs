//! Password hashing
//!
//! bcrypt wrapper used by the auth service. The salt is generated per call
//! and embedded in the resulting digest, so verification needs nothing but
//! the stored string.

use thiserror::Error;

/// Default bcrypt work factor.
pub const DEFAULT_COST: u32 = 10;

/// Well-formed cost-10 bcrypt digest of an arbitrary phrase. Verified
/// against when a login email has no matching row, so a miss costs the same
/// bcrypt work as a wrong password.
pub(crate) const PHANTOM_HASH: &str =
    "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// Errors from password hashing
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Hash a plaintext password with the given work factor.
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, PasswordError> {
    bcrypt::hash(plaintext, cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
}

/// Verify a plaintext password against a stored bcrypt digest.
///
/// A malformed stored digest is treated as a mismatch, never as a failure.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    bcrypt::verify(plaintext, stored_hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // MIN_COST keeps the test suite fast; production cost comes from config.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("secret123", TEST_COST).unwrap();
        assert!(verify_password("secret123", &hash));
        assert!(!verify_password("secret124", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("secret123", TEST_COST).unwrap();
        let second = hash_password("secret123", TEST_COST).unwrap();
        assert_ne!(first, second);
        assert!(verify_password("secret123", &first));
        assert!(verify_password("secret123", &second));
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        assert!(!verify_password("secret123", "not-a-bcrypt-digest"));
        assert!(!verify_password("secret123", ""));
    }

    #[test]
    fn test_phantom_hash_is_well_formed() {
        // Must exercise a full bcrypt round, not the malformed-hash path.
        assert!(!verify_password("definitely-wrong", PHANTOM_HASH));
    }
}
