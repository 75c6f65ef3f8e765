//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the message-signing subsystem.

use crate::domain::entities::{
    HashInput, HashVerification, KeyInput, MessageVerification, Verdict,
};
use crate::domain::errors::SigningError;

/// Primary message signing and verification API.
///
/// Signing is fully synchronous. Verification suspends exactly once, at the
/// oracle query; dropping a pending verification future abandons the
/// in-flight request. Implementations must be thread-safe (`Send + Sync`).
#[async_trait::async_trait]
pub trait MessageSigningApi: Send + Sync {
    /// Sign a free-form message, returning the base64 signature text.
    ///
    /// The message is hashed with the domain-separation prefix before
    /// signing, so the signature cannot be replayed against a bare hash of
    /// unrelated content.
    fn sign_message(&self, message: &str, key: KeyInput) -> Result<String, SigningError>;

    /// Sign an externally supplied hash, returning the base64 signature text.
    fn sign_hash(&self, hash: HashInput, key: KeyInput) -> Result<String, SigningError>;

    /// Verify a signature over a free-form message.
    ///
    /// Hashes `MAGIC_PREFIX || message`, then runs the same pipeline as
    /// [`verify_hash_signature`](Self::verify_hash_signature) from the
    /// account-validation step onward.
    async fn verify_message_signature(
        &self,
        request: MessageVerification,
    ) -> Result<Verdict, SigningError>;

    /// Verify a signature over an externally supplied hash.
    ///
    /// Strict ordered pipeline, short-circuiting on the first failure:
    /// hash normalization, account validation, signature decoding, oracle
    /// connectivity, public-key recovery, authorization check. Later steps
    /// never run on invalid input.
    async fn verify_hash_signature(
        &self,
        request: HashVerification,
    ) -> Result<Verdict, SigningError>;
}
