//! Fuzz target for the signature transport codec and byte-layout parser.
//!
//! ## Running
//!
//! ```bash
//! cd crates/message-signing
//! cargo +nightly fuzz run fuzz_signature_decode
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use meridian_message_signing::domain::codec;
use meridian_message_signing::RecoverableSignature;

fuzz_target!(|text: &str| {
    // Decoding arbitrary text must never panic, and must be deterministic.
    let first = codec::decode(text);
    let second = codec::decode(text);
    assert_eq!(first, second);

    if let Ok(bytes) = first {
        // Whatever decoded must re-encode to text that decodes to the same
        // bytes (the engine is canonical).
        let reencoded = codec::encode(&bytes);
        assert_eq!(codec::decode(&reencoded).as_deref(), Ok(bytes.as_slice()));

        // Layout parsing must never panic; on success the recovery id is in
        // range and serialization parses back to the same signature.
        if let Ok(signature) = RecoverableSignature::from_bytes(&bytes) {
            assert!(signature.recovery_id <= 3);
            let roundtripped =
                RecoverableSignature::from_bytes(&signature.to_bytes()).unwrap();
            assert_eq!(roundtripped, signature);
        }
    }
});
