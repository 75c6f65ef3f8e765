//! # Recovery Engine
//!
//! Reconstructs the signer's public key from a canonical hash and a decoded
//! signature. Pure, no I/O.

use super::entities::{MessageHash, RecoverableSignature};
use super::errors::SigningError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

/// Recover the public key that produced `signature` over `hash`.
///
/// The embedded recovery id selects the correct candidate among the
/// algebraically possible keys, and the primitive verifies the signature
/// against the candidate before returning it. Out-of-range recovery ids,
/// out-of-range or zero scalars, and unrecoverable points all fail with
/// [`SigningError::RecoveryFailed`].
pub fn recover_public_key(
    hash: &MessageHash,
    signature: &RecoverableSignature,
) -> Result<VerifyingKey, SigningError> {
    let recovery_id =
        RecoveryId::try_from(signature.recovery_id).map_err(|_| SigningError::RecoveryFailed)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let sig = Signature::from_slice(&sig_bytes).map_err(|_| SigningError::RecoveryFailed)?;

    VerifyingKey::recover_from_prehash(hash.as_bytes(), &sig, recovery_id)
        .map_err(|_| SigningError::RecoveryFailed)
}

/// Canonical external form of a public key: compressed SEC1 point, lowercase hex.
pub fn compressed_hex(key: &VerifyingKey) -> String {
    hex::encode(key.to_encoded_point(true).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{hash, signing};
    use k256::ecdsa::SigningKey;

    #[test]
    fn test_recover_matches_signer() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let digest = hash::message_digest("recover me");
        let sig = signing::sign_hash(&digest, &key).unwrap();

        let recovered = recover_public_key(&digest, &sig).unwrap();

        assert_eq!(recovered, *key.verifying_key());
    }

    #[test]
    fn test_recover_consistent_across_messages() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let expected = compressed_hex(key.verifying_key());

        for i in 0..10 {
            let digest = hash::message_digest(&format!("message {i}"));
            let sig = signing::sign_hash(&digest, &key).unwrap();
            let recovered = recover_public_key(&digest, &sig).unwrap();
            assert_eq!(compressed_hex(&recovered), expected);
        }
    }

    #[test]
    fn test_wrong_hash_recovers_different_key() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let digest = hash::message_digest("signed message");
        let other = hash::message_digest("different message");
        let sig = signing::sign_hash(&digest, &key).unwrap();

        // Recovery against the wrong hash either fails or yields some other
        // key; it must never yield the signer's.
        match recover_public_key(&other, &sig) {
            Ok(recovered) => assert_ne!(recovered, *key.verifying_key()),
            Err(e) => assert_eq!(e, SigningError::RecoveryFailed),
        }
    }

    #[test]
    fn test_zero_scalars_rejected() {
        let digest = hash::message_digest("zero scalars");

        let zero_r = RecoverableSignature {
            r: [0; 32],
            s: [1; 32],
            recovery_id: 0,
        };
        assert_eq!(
            recover_public_key(&digest, &zero_r),
            Err(SigningError::RecoveryFailed)
        );

        let zero_s = RecoverableSignature {
            r: [1; 32],
            s: [0; 32],
            recovery_id: 0,
        };
        assert_eq!(
            recover_public_key(&digest, &zero_s),
            Err(SigningError::RecoveryFailed)
        );
    }

    #[test]
    fn test_out_of_range_recovery_id_rejected() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let digest = hash::message_digest("bad recovery id");
        let mut sig = signing::sign_hash(&digest, &key).unwrap();
        sig.recovery_id = 4;

        assert_eq!(
            recover_public_key(&digest, &sig),
            Err(SigningError::RecoveryFailed)
        );
    }

    #[test]
    fn test_compressed_hex_format() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let hex_key = compressed_hex(key.verifying_key());

        assert_eq!(hex_key.len(), 66);
        assert!(hex_key.starts_with("02") || hex_key.starts_with("03"));
        assert!(hex_key.bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(hex_key, hex_key.to_lowercase());
    }
}
