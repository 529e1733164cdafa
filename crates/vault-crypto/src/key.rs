//! Master-secret key derivation.
//!
//! The derivation is deliberately fixed: every ciphertext ever stored was
//! produced under a key computed exactly this way, and there is no separate
//! key storage — the master secret is the only input that can reproduce the
//! key. Changing the derivation silently would strand all existing data.

use sha1::{Digest, Sha1};

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// A symmetric key derived from a master secret.
///
/// Short-lived by contract: derived at the start of a vault operation, used
/// for one encrypt or decrypt, then dropped. When this type is dropped the
/// memory is overwritten with zeroes to minimise the window during which key
/// material lives in RAM.
#[derive(Clone)]
pub struct DerivedKey(Box<[u8; KEY_LEN]>);

impl DerivedKey {
    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        // Zero the key material on drop.
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive the symmetric encryption key from a user-supplied master secret.
///
/// Computes the SHA-1 digest of the secret's UTF-8 bytes and copies it
/// left-aligned into a 32-byte buffer, zero-padding the remaining 12 bytes.
/// Deterministic: equal secrets always yield byte-identical keys, which is
/// what lets previously stored fields decrypt with nothing but the master
/// secret. Accepts any input, including the empty string; validation belongs
/// to the caller.
///
/// # Known weakness
///
/// Filling a 256-bit key from a 160-bit digest caps the effective key
/// entropy at 160 bits, and the derivation is unsalted and fast. This is
/// preserved for compatibility with existing ciphertext, not endorsed; a
/// stronger derivation would have to arrive as a versioned alternative
/// alongside this one.
pub fn derive_key(master_secret: &str) -> DerivedKey {
    let digest = Sha1::digest(master_secret.as_bytes());

    let mut key = Box::new([0u8; KEY_LEN]);
    key[..digest.len()].copy_from_slice(&digest);

    DerivedKey(key)
}
