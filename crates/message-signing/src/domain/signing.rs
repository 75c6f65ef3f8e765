//! # Signing Engine
//!
//! Produces recoverable secp256k1 signatures over canonical hashes.
//!
//! The recovery id embedded in the result lets a verifier reconstruct the
//! signer's public key from (hash, signature) alone, so the signer never has
//! to transmit its public key and the authority check shifts entirely to the
//! authorization oracle.

use super::entities::{MessageHash, RecoverableSignature};
use super::errors::SigningError;
use k256::ecdsa::SigningKey;

/// Sign a canonical hash, returning a recoverable signature.
///
/// Nonces are RFC 6979 deterministic and s is normalized low, with the
/// recovery id adjusted to match, so repeated calls with the same inputs
/// yield the same signature. The primitive consumes the hash as a prehash,
/// taking its leftmost 256 bits; digests shorter than half the scalar size
/// are rejected as [`SigningError::InvalidHash`].
pub fn sign_hash(
    hash: &MessageHash,
    key: &SigningKey,
) -> Result<RecoverableSignature, SigningError> {
    let (signature, recovery_id) = key
        .sign_prehash_recoverable(hash.as_bytes())
        .map_err(|_| SigningError::InvalidHash)?;

    let sig_bytes = signature.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig_bytes[..32]);
    s.copy_from_slice(&sig_bytes[32..]);

    Ok(RecoverableSignature {
        r,
        s,
        recovery_id: recovery_id.to_byte(),
    })
}
