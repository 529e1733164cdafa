//! Error taxonomy for the vault cryptography core.

use thiserror::Error;

/// Errors produced by the cryptography core.
///
/// All variants are raised synchronously to the immediate caller; nothing is
/// retried internally. The `Display` text is fixed per variant and safe to
/// surface — it never embeds key material, secrets, or decoded bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The caller supplied unusable input: an empty or whitespace-only
    /// plaintext on encrypt, or an empty blob on decrypt. A client-side
    /// validation failure, raised before any cryptographic work.
    #[error("input must not be empty or whitespace-only")]
    InvalidInput,

    /// The stored blob is not valid base64, or decodes to fewer bytes than
    /// one cipher block. Indicates corrupted or truncated stored data,
    /// distinct from a cryptographic failure.
    #[error("ciphertext blob is not valid base64-encoded IV + ciphertext")]
    MalformedEncoding,

    /// Padding validation failed after decryption. Almost always a wrong
    /// key (wrong master secret) or a corrupted ciphertext; with
    /// unauthenticated CBC this is the only wrong-key signal available.
    #[error("decryption failed: wrong key or corrupted ciphertext")]
    DecryptionFailed,
}

impl CryptoError {
    /// Stable machine-readable code for this error, for callers that map
    /// core failures onto a transport-level response.
    pub fn code(&self) -> &'static str {
        match self {
            CryptoError::InvalidInput => "invalid_input",
            CryptoError::MalformedEncoding => "malformed_encoding",
            CryptoError::DecryptionFailed => "decryption_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(CryptoError::InvalidInput.code(), "invalid_input");
        assert_eq!(CryptoError::MalformedEncoding.code(), "malformed_encoding");
        assert_eq!(CryptoError::DecryptionFailed.code(), "decryption_failed");
    }

    #[test]
    fn display_never_mentions_internals() {
        // The decrypt failure message must stay generic: callers surface it
        // as "wrong master password or corrupted entry" without detail.
        let msg = CryptoError::DecryptionFailed.to_string();
        assert!(msg.contains("wrong key"));
        assert!(!msg.contains("padding"));
    }
}
