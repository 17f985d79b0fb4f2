//! bcrypt credential hasher.

use crate::domain::config::DEFAULT_BCRYPT_COST;
use crate::error::CredentialError;
use crate::ports::CredentialHasher;

/// bcrypt with a fresh random salt on every call.
///
/// Output is the modular-crypt string `$2b$<cost>$<salt><digest>`, so a later
/// check needs nothing besides the hash itself.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CredentialError> {
        Ok(bcrypt::verify(plaintext, hash)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the tests fast; the format is the same at any cost.
    fn hasher() -> BcryptHasher {
        BcryptHasher::new(4)
    }

    #[test]
    fn test_fresh_salt_per_call() {
        let hasher = hasher();
        let first = hasher.hash("password1").unwrap();
        let second = hasher.hash("password1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("password1", &first).unwrap());
        assert!(hasher.verify("password1", &second).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hasher = hasher();
        let hash = hasher.hash("password1").unwrap();
        assert!(!hasher.verify("password2", &hash).unwrap());
    }

    #[test]
    fn test_self_describing_format() {
        let hash = BcryptHasher::new(5).hash("password1").unwrap();
        assert!(hash.starts_with("$2b$05$"));
        assert_eq!(hash.len(), 60);
        assert!(!hash.contains("password1"));
    }

    #[test]
    fn test_default_cost() {
        assert_eq!(BcryptHasher::default().cost(), 10);
    }

    #[test]
    fn test_malformed_hash_is_error() {
        assert!(hasher().verify("password1", "not-a-hash").is_err());
    }
}
