//! # Signature Codec
//!
//! Converts between the base64 transport form of a signature and its raw
//! bytes. Algebraic validity is not checked here; that belongs to the
//! recovery engine.

use super::errors::SigningError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode signature bytes as base64 transport text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 transport text into signature bytes.
///
/// The standard engine rejects out-of-alphabet characters, misplaced or
/// missing padding, and non-canonical trailing bits, all of which surface as
/// [`SigningError::InvalidSignatureEncoding`].
pub fn decode(text: &str) -> Result<Vec<u8>, SigningError> {
    if text.is_empty() {
        return Err(SigningError::InvalidSignatureEncoding);
    }
    STANDARD
        .decode(text)
        .map_err(|_| SigningError::InvalidSignatureEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let bytes = [0x1Bu8, 0xAA, 0xBB, 0xCC, 0xDD];
        let text = encode(&bytes);
        assert_eq!(decode(&text).unwrap(), bytes);
    }

    #[test]
    fn test_decode_rejects_bad_padding() {
        // Valid alphabet, broken padding
        for text in ["AAAA=", "AA==AA", "A", "AAAAA"] {
            assert_eq!(
                decode(text),
                Err(SigningError::InvalidSignatureEncoding),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_rejects_out_of_alphabet() {
        for text in ["", "####", "AA AA", "AAA!"] {
            assert_eq!(decode(text), Err(SigningError::InvalidSignatureEncoding));
        }
    }
}
