//! Fuzz target for public-key recovery.
//!
//! Recovery consumes attacker-controlled hashes and signatures; it must fail
//! cleanly on every malformed input and never panic.
//!
//! ## Running
//!
//! ```bash
//! cd crates/message-signing
//! cargo +nightly fuzz run fuzz_recover
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use meridian_message_signing::domain::recovery;
use meridian_message_signing::{MessageHash, RecoverableSignature};

/// Fuzz input: an arbitrary hash and signature components.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    hash: Vec<u8>,
    r: [u8; 32],
    s: [u8; 32],
    recovery_id: u8,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(hash) = MessageHash::new(input.hash) else {
        return;
    };
    let signature = RecoverableSignature {
        r: input.r,
        s: input.s,
        recovery_id: input.recovery_id,
    };

    // Must not panic, and must be deterministic.
    let first = recovery::recover_public_key(&hash, &signature);
    let second = recovery::recover_public_key(&hash, &signature);
    assert_eq!(first.is_ok(), second.is_ok());

    if let (Ok(a), Ok(b)) = (first, second) {
        assert_eq!(a, b);
        // The canonical external form is always a compressed point in hex.
        let hex_key = recovery::compressed_hex(&a);
        assert_eq!(hex_key.len(), 66);
        assert!(hex_key.starts_with("02") || hex_key.starts_with("03"));
    }
});
