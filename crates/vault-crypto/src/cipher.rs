//! AES-256-CBC encryption and decryption of individual credential fields.
//!
//! **Algorithm choice is inherited, not chosen:** every credential value at
//! rest is `base64(IV ‖ AES-256-CBC ciphertext)` with PKCS#7 padding, and
//! stored data must keep decrypting. There is no authentication tag, so a
//! wrong key is detected only when padding removal fails — a small fraction
//! of wrong-key attempts will coincidentally unpad cleanly and come back as
//! garbage text instead of an error. That is an inherent property of
//! unauthenticated CBC, documented here rather than silently "fixed".

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CryptoError;
use crate::key::DerivedKey;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Byte length of an AES block, and therefore of the IV (16 bytes = 128 bits).
pub const BLOCK_LEN: usize = 16;

/// An encrypted credential field as stored at rest.
///
/// The string representation is `base64(IV ‖ ciphertext)` in standard base64:
/// the first [`BLOCK_LEN`] decoded bytes are the IV, the remainder is the
/// CBC ciphertext (a positive multiple of [`BLOCK_LEN`]). Self-contained and
/// text-safe, suitable for a varchar column or a JSON body.
///
/// Construction performs no validation — stored values travel through the
/// persistence layer untyped, so any string is accepted here and checked by
/// [`decrypt_field`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedCiphertext(String);

impl EncodedCiphertext {
    /// Wrap a stored blob string.
    pub fn new(blob: impl Into<String>) -> Self {
        Self(blob.into())
    }

    /// The blob as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the blob string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for EncodedCiphertext {
    fn from(blob: String) -> Self {
        Self(blob)
    }
}

impl std::fmt::Display for EncodedCiphertext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encrypt a plaintext credential field under the given key.
///
/// A fresh random 16-byte IV is drawn from the OS CSPRNG on every call, so
/// encrypting the same plaintext twice under the same key yields two
/// different blobs — repeated credential values must not be recognisable by
/// pattern-matching on stored data. Both blobs decrypt to the original.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidInput`] if `plaintext` is empty or
/// whitespace-only, before any cryptographic work. No other failures are
/// expected with a well-formed key.
pub fn encrypt_field(plaintext: &str, key: &DerivedKey) -> Result<EncodedCiphertext, CryptoError> {
    if plaintext.trim().is_empty() {
        return Err(CryptoError::InvalidInput);
    }

    // Fresh IV per call; OsRng is a zero-sized handle to the OS CSPRNG and
    // is safe to use concurrently from any thread.
    let mut iv = [0u8; BLOCK_LEN];
    OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let mut blob = Vec::with_capacity(BLOCK_LEN + ciphertext.len());
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&ciphertext);

    Ok(EncodedCiphertext(STANDARD.encode(blob)))
}

/// Decrypt a stored blob back to the plaintext credential field.
///
/// Decodes the base64 blob, splits off the leading 16-byte IV, CBC-decrypts
/// the remainder and removes the PKCS#7 padding. The decrypted bytes are
/// read as UTF-8 with invalid sequences replaced, matching how previously
/// stored data has always been read back: in the rare wrong-key case where
/// the padding happens to validate, the caller receives garbage text rather
/// than an error.
///
/// # Errors
///
/// - [`CryptoError::InvalidInput`] if the blob is empty.
/// - [`CryptoError::MalformedEncoding`] if the blob is not valid base64, or
///   decodes to fewer bytes than one IV plus one ciphertext block, or to a
///   ciphertext that is not block-aligned. Raised before any cryptography.
/// - [`CryptoError::DecryptionFailed`] if padding validation fails — almost
///   always a wrong master secret or a corrupted ciphertext.
pub fn decrypt_field(blob: &EncodedCiphertext, key: &DerivedKey) -> Result<String, CryptoError> {
    if blob.as_str().is_empty() {
        return Err(CryptoError::InvalidInput);
    }

    let decoded = STANDARD.decode(blob.as_str()).map_err(|_| {
        debug!(blob_len = blob.as_str().len(), "blob is not valid base64");
        CryptoError::MalformedEncoding
    })?;

    if decoded.len() < BLOCK_LEN {
        debug!(decoded_len = decoded.len(), "blob shorter than one block");
        return Err(CryptoError::MalformedEncoding);
    }

    let mut iv = [0u8; BLOCK_LEN];
    iv.copy_from_slice(&decoded[..BLOCK_LEN]);
    let ciphertext = &decoded[BLOCK_LEN..];

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        debug!(
            ciphertext_len = ciphertext.len(),
            "ciphertext is not a positive multiple of the block size"
        );
        return Err(CryptoError::MalformedEncoding);
    }

    let plaintext = Aes256CbcDec::new(key.as_bytes().into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            debug!("padding validation failed after decryption");
            CryptoError::DecryptionFailed
        })?;

    Ok(String::from_utf8_lossy(&plaintext).into_owned())
}
