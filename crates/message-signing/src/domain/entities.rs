//! # Domain Entities
//!
//! Core data structures for message signing and verification.

use super::errors::SigningError;
use k256::ecdsa::SigningKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroizing;

/// Serialized length of a recoverable signature: header byte + r + s.
pub const SIGNATURE_LEN: usize = 65;

/// Canonical message hash: a non-empty byte vector.
///
/// Every algorithm in this crate consumes hashes in this form; external hash
/// encodings are normalized into it exactly once at the entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHash(pub(crate) Vec<u8>);

impl MessageHash {
    /// Create a canonical hash from raw bytes. Empty input is rejected.
    pub fn new(bytes: Vec<u8>) -> Result<Self, SigningError> {
        if bytes.is_empty() {
            return Err(SigningError::InvalidHash);
        }
        Ok(Self(bytes))
    }

    /// Raw hash bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Externally supplied hash, before normalization.
///
/// The original transport accepts either a hex string or an already-decoded
/// byte vector; the two shapes are distinguished here once instead of being
/// sniffed at every call site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashInput {
    /// Hex-encoded hash text
    Hex(String),
    /// Already-decoded hash bytes
    Raw(Vec<u8>),
}

/// Secret-key input for the signing operations.
///
/// Either a ready-to-use secp256k1 signing key, or seed material to be handed
/// to the key-derivation service. Seed material is wiped from memory when the
/// input is dropped.
pub enum KeyInput {
    /// A secret-key handle supplied directly by the caller
    Direct(SigningKey),
    /// Seed material for the key-derivation service
    Seed {
        /// Passphrase or encoded seed, interpreted by the deriver
        material: Zeroizing<String>,
        /// Account index within the seed's key sequence; `None` selects the
        /// deriver's default account
        selector: Option<u32>,
    },
}

impl KeyInput {
    /// Seed-material input with an optional account selector.
    pub fn seed(material: impl Into<String>, selector: Option<u32>) -> Self {
        Self::Seed {
            material: Zeroizing::new(material.into()),
            selector,
        }
    }
}

impl fmt::Debug for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key or seed material
        match self {
            Self::Direct(_) => f.write_str("KeyInput::Direct(..)"),
            Self::Seed { selector, .. } => f
                .debug_struct("KeyInput::Seed")
                .field("selector", selector)
                .finish_non_exhaustive(),
        }
    }
}

/// Recoverable ECDSA signature on the secp256k1 curve.
///
/// Carries the recovery id alongside r and s, so a verifier can reconstruct
/// the signer's public key from (hash, signature) alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery id (0..=3), selecting the candidate public key
    pub recovery_id: u8,
}

impl RecoverableSignature {
    /// Serialize to the 65-byte transport layout: `(27 + recovery_id) || r || s`.
    ///
    /// The header byte carries the legacy 27 offset used by ledger
    /// signed-message schemes.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[0] = 27 + self.recovery_id;
        bytes[1..33].copy_from_slice(&self.r);
        bytes[33..].copy_from_slice(&self.s);
        bytes
    }

    /// Parse the 65-byte transport layout.
    ///
    /// The header byte is accepted both raw (0..=3) and with the legacy 27
    /// offset (27..=30). Anything else is a structurally invalid signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SigningError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(SigningError::RecoveryFailed);
        }

        let recovery_id = match bytes[0] {
            id @ 0..=3 => id,
            id @ 27..=30 => id - 27,
            _ => return Err(SigningError::RecoveryFailed),
        };

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[1..33]);
        s.copy_from_slice(&bytes[33..]);

        Ok(Self { r, s, recovery_id })
    }
}

/// Opaque account identifier.
///
/// Syntactic validity is delegated to the address codec; this type is never
/// constructed from parts or mutated here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Wrap an application-supplied account identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request to verify a signature over an externally supplied hash.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HashVerification {
    /// The hash the signature covers
    pub hash: HashInput,
    /// The account the signer claims to act for
    pub account: AccountId,
    /// Base64-encoded signature text
    pub signature: String,
}

/// Request to verify a signature over a free-form message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageVerification {
    /// The message the signature covers (hashed with the domain-separation
    /// prefix before verification)
    pub message: String,
    /// The account the signer claims to act for
    pub account: AccountId,
    /// Base64-encoded signature text
    pub signature: String,
}

/// Outcome of a completed verification pipeline.
///
/// Produced only when recovery succeeded and the oracle answered; every
/// earlier failure surfaces as a [`SigningError`] instead. `valid: false`
/// means the oracle does not currently list the recovered key as active for
/// the account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The oracle's answer for (public_key, account)
    pub valid: bool,
    /// The recovered signer key, compressed SEC1 point as lowercase hex
    pub public_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_hash_rejects_empty() {
        assert_eq!(
            MessageHash::new(Vec::new()),
            Err(SigningError::InvalidHash)
        );
    }

    #[test]
    fn test_signature_roundtrip_bytes() {
        let sig = RecoverableSignature {
            r: [0xAA; 32],
            s: [0xBB; 32],
            recovery_id: 1,
        };

        let bytes = sig.to_bytes();
        assert_eq!(bytes[0], 28);

        let parsed = RecoverableSignature::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, sig);
    }

    #[test]
    fn test_signature_accepts_raw_recovery_byte() {
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[0] = 2;
        let parsed = RecoverableSignature::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.recovery_id, 2);
    }

    #[test]
    fn test_signature_rejects_bad_recovery_byte() {
        let mut bytes = [0u8; SIGNATURE_LEN];
        for header in [4u8, 26, 31, 255] {
            bytes[0] = header;
            assert_eq!(
                RecoverableSignature::from_bytes(&bytes),
                Err(SigningError::RecoveryFailed),
                "header {header} should be rejected"
            );
        }
    }

    #[test]
    fn test_signature_rejects_wrong_length() {
        assert_eq!(
            RecoverableSignature::from_bytes(&[0u8; 64]),
            Err(SigningError::RecoveryFailed)
        );
        assert_eq!(
            RecoverableSignature::from_bytes(&[0u8; 66]),
            Err(SigningError::RecoveryFailed)
        );
        assert_eq!(
            RecoverableSignature::from_bytes(&[]),
            Err(SigningError::RecoveryFailed)
        );
    }

    #[test]
    fn test_key_input_debug_hides_material() {
        let input = KeyInput::seed("shhDoNotPrintMe", Some(3));
        let rendered = format!("{input:?}");
        assert!(!rendered.contains("shhDoNotPrintMe"));
        assert!(rendered.contains("selector"));
    }
}
