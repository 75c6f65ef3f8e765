//! # Signing Errors
//!
//! Error types for message signing and verification.

use thiserror::Error;

/// Errors that can occur while signing a message or verifying a signature.
///
/// Three classes share this enum:
/// - input validation (`InvalidHash`, `InvalidAccount`,
///   `InvalidSignatureEncoding`) — synchronous, never retried;
/// - cryptographic (`RecoveryFailed`) — deterministic in the inputs, a retry
///   with the same inputs cannot succeed;
/// - external (`OracleUnavailable`, `OracleTransport`) — the only class where
///   a caller-side retry might help.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// The hash input is not a hex-encoded string or non-empty byte vector
    #[error("hash must be a non-empty byte vector or hex-encoded string")]
    InvalidHash,

    /// The account identifier was rejected by the address codec
    #[error("account is not a valid ledger address: {0}")]
    InvalidAccount(String),

    /// The signature text is not well-formed base64
    #[error("signature must be a base64-encoded string")]
    InvalidSignatureEncoding,

    /// The public key could not be recovered from the signature
    #[error("could not recover public key from signature")]
    RecoveryFailed,

    /// The authorization oracle is not connected
    #[error("authorization oracle is not connected")]
    OracleUnavailable,

    /// The key-derivation service rejected the seed material
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// The oracle was reachable but the query itself failed
    #[error("oracle transport failure: {0}")]
    OracleTransport(String),
}
