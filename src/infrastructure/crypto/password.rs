//! Password hashing utilities

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::domain::{DomainError, DomainResult, PasswordHasher};

/// Hash a password using bcrypt
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

/// `PasswordHasher` backed by bcrypt.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        hash_password(password, self.cost).map_err(|e| DomainError::Crypto(e.to_string()))
    }

    /// A malformed stored hash counts as a mismatch.
    fn verify(&self, password: &str, hash: &str) -> bool {
        verify_password(password, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptHasher::new(4);
        let password = "secure_password_123";
        let hashed = hasher.hash(password).unwrap();

        assert!(hasher.verify(password, &hashed));
        assert!(!hasher.verify("wrong_password", &hashed));
    }

    #[test]
    fn test_garbage_hash_does_not_verify() {
        let hasher = BcryptHasher::new(4);
        assert!(!hasher.verify("secret", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_invalid_cost_is_a_crypto_error() {
        let hasher = BcryptHasher::new(1);
        assert!(matches!(hasher.hash("secret"), Err(DomainError::Crypto(_))));
    }
}
