//! Salted master-secret hashing for stored-credential verification.
//!
//! Intentionally separate from key derivation: this output is a reference
//! value compared against a stored hash, never a reusable encryption key, so
//! it uses the wider SHA-256 digest and takes an explicit salt.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};

/// Hash a master secret together with a salt, for storage and verification.
///
/// Computes standard base64 of `SHA-256(salt ‖ secret)` — salt first, then
/// the secret, both as UTF-8 bytes. Deterministic: equal `(secret, salt)`
/// pairs always produce equal output, and any change to either input changes
/// the output. Infallible for any text inputs.
///
/// The salt is a caller responsibility: it must be unique per stored hash.
/// Reusing one fixed salt across records defeats the point of salting and
/// lets identical secrets be spotted by identical hashes.
pub fn hash_master_secret(secret: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(secret.as_bytes());
    STANDARD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_same_hash() {
        let hash1 = hash_master_secret("userMasterPassword", "staticSalt123");
        let hash2 = hash_master_secret("userMasterPassword", "staticSalt123");
        assert_eq!(hash1, hash2);
        assert!(!hash1.is_empty());
    }

    #[test]
    fn different_secrets_different_hashes() {
        let hash1 = hash_master_secret("password123", "commonSalt");
        let hash2 = hash_master_secret("differentPassword456", "commonSalt");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn different_salts_different_hashes() {
        let hash1 = hash_master_secret("samePassword", "salt123");
        let hash2 = hash_master_secret("samePassword", "differentSalt456");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn output_is_base64_of_a_sha256_digest() {
        let hash = hash_master_secret("p", "s");
        let decoded = STANDARD.decode(&hash).unwrap();
        assert_eq!(decoded.len(), 32);
    }

    #[test]
    fn salt_and_secret_are_not_interchangeable() {
        // salt ‖ secret ordering matters: swapping the inputs must not
        // collide unless the concatenations happen to be equal.
        let hash1 = hash_master_secret("abc", "xyz");
        let hash2 = hash_master_secret("xyz", "abc");
        assert_ne!(hash1, hash2);
    }
}
