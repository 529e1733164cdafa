//! Credential-vault cryptography core.
//!
//! Turns a user-supplied master secret into a reproducible symmetric key and
//! reversibly protects short credential fields at rest. This crate is
//! consumed in-process by the HTTP and persistence layers; it has no network
//! or file surface of its own, and every operation is a pure, stateless,
//! synchronous computation that may run concurrently from any thread.
//!
//! # Stored blob format
//!
//! ```text
//! base64-standard(IV ‖ ciphertext)
//! ```
//!
//! IV is 16 bytes; ciphertext is AES-256-CBC with PKCS#7 padding, a positive
//! multiple of 16 bytes. The key is derived from the master secret alone
//! ([`derive_key`]) and is never stored, so this exact layout and derivation
//! are pinned by existing stored data.
//!
//! # Example
//!
//! ```
//! use vault_crypto::{decrypt_field, derive_key, encrypt_field};
//!
//! # fn main() -> Result<(), vault_crypto::CryptoError> {
//! let key = derive_key("correct horse battery staple");
//! let blob = encrypt_field("hunter2", &key)?;
//! assert_eq!(decrypt_field(&blob, &key)?, "hunter2");
//! # Ok(())
//! # }
//! ```

pub mod cipher;
pub mod error;
pub mod hash;
pub mod key;

pub use cipher::{decrypt_field, encrypt_field, EncodedCiphertext, BLOCK_LEN};
pub use error::CryptoError;
pub use hash::hash_master_secret;
pub use key::{derive_key, DerivedKey, KEY_LEN};

#[cfg(test)]
mod tests {
    use super::*;

    // End-to-end scenario: the full sequence a vault operation performs.
    #[test]
    fn master_secret_to_stored_value_and_back() {
        let key1 = derive_key("consistentPassword123");
        let key2 = derive_key("consistentPassword123");
        assert_eq!(key1.as_bytes(), key2.as_bytes());

        let blob1 = encrypt_field("samePassword123", &key1).unwrap();
        let blob2 = encrypt_field("samePassword123", &key2).unwrap();
        assert_ne!(blob1, blob2);
        assert_eq!(decrypt_field(&blob1, &key2).unwrap(), "samePassword123");
        assert_eq!(decrypt_field(&blob2, &key1).unwrap(), "samePassword123");
    }

    #[test]
    fn round_trip_with_derived_keys_across_secrets() {
        for secret in ["a", "masterKey123", "Unicode secret: 测试"] {
            let key = derive_key(secret);
            let blob = encrypt_field("stored credential", &key).unwrap();
            assert_eq!(decrypt_field(&blob, &key).unwrap(), "stored credential");
        }
    }
}
