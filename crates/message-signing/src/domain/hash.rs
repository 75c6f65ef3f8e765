//! # Hash Normalizer
//!
//! Canonicalizes externally supplied hash input and computes the
//! domain-separated digest for free-form messages.

use super::entities::{HashInput, MessageHash};
use super::errors::SigningError;
use sha2::{Digest, Sha512};

/// Domain-separation prefix prepended to every free-form message before
/// hashing, so a hash-signature cannot be reinterpreted as covering an
/// unrelated message that shares the digest.
pub const MAGIC_PREFIX: &str = "Meridian Signed Message:\n";

/// Normalize an external hash encoding into the canonical form.
///
/// Accepts a hex string (`[0-9a-fA-F]+`, even length) or an already-decoded
/// non-empty byte vector. Everything else fails with
/// [`SigningError::InvalidHash`]. Pure, no side effects.
pub fn normalize(input: HashInput) -> Result<MessageHash, SigningError> {
    match input {
        HashInput::Hex(text) => {
            if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(SigningError::InvalidHash);
            }
            // Odd-length hex has no byte decoding; fail closed.
            let bytes = hex::decode(&text).map_err(|_| SigningError::InvalidHash)?;
            MessageHash::new(bytes)
        }
        HashInput::Raw(bytes) => MessageHash::new(bytes),
    }
}

/// SHA-512 digest of `MAGIC_PREFIX || message`.
///
/// The signing primitive consumes this as a prehash and takes its leftmost
/// 256 bits, so the full 64-byte digest is kept canonical.
pub fn message_digest(message: &str) -> MessageHash {
    let mut hasher = Sha512::new();
    hasher.update(MAGIC_PREFIX.as_bytes());
    hasher.update(message.as_bytes());
    MessageHash(hasher.finalize().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex() {
        let hash = normalize(HashInput::Hex("deadBEEF".into())).unwrap();
        assert_eq!(hash.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_normalize_raw_passthrough() {
        let hash = normalize(HashInput::Raw(vec![1, 2, 3])).unwrap();
        assert_eq!(hash.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_normalize_rejects_non_hex() {
        for text in ["", "xyz", "dead beef", "0x1234", "12g4"] {
            assert_eq!(
                normalize(HashInput::Hex(text.into())),
                Err(SigningError::InvalidHash),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_rejects_odd_length_hex() {
        assert_eq!(
            normalize(HashInput::Hex("abc".into())),
            Err(SigningError::InvalidHash)
        );
    }

    #[test]
    fn test_normalize_rejects_empty_raw() {
        assert_eq!(
            normalize(HashInput::Raw(Vec::new())),
            Err(SigningError::InvalidHash)
        );
    }

    #[test]
    fn test_message_digest_is_domain_separated() {
        let message = "hello";
        let digest = message_digest(message);
        assert_eq!(digest.as_bytes().len(), 64);

        // Hashing the bare message must not produce the same digest.
        let mut hasher = Sha512::new();
        hasher.update(message.as_bytes());
        let bare: Vec<u8> = hasher.finalize().to_vec();
        assert_ne!(digest.as_bytes(), bare.as_slice());
    }

    #[test]
    fn test_message_digest_deterministic() {
        assert_eq!(message_digest("hello"), message_digest("hello"));
        assert_ne!(message_digest("hello"), message_digest("hellp"));
    }
}
