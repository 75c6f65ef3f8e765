//! # Meridian Message Signing
//!
//! Recoverable message signing and oracle-backed signature verification for
//! the Meridian ledger.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure logic — hash normalization, the
//!   base64 signature codec, recoverable signing, and public-key recovery.
//!   No I/O.
//! - **Ports Layer** (`ports/`): Trait definitions for the public API and the
//!   three external collaborators (key deriver, address codec, authorization
//!   oracle).
//! - **Service Layer** (`service.rs`): [`MessageService`] wires the domain
//!   pipeline to the ports.
//!
//! ## Security Notes
//!
//! - Signatures carry a recovery id, so verifiers reconstruct the signer's
//!   public key from (hash, signature) alone and ask the oracle whether that
//!   key is *currently* active for the claimed account — there is no stale
//!   public key to trust at the transport layer.
//! - Free-form messages are hashed under the [`MAGIC_PREFIX`] domain
//!   separator before signing.
//! - Verification fails closed: every malformed input surfaces a typed error,
//!   and an ambiguous outcome never resolves to a valid verdict.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{
    AccountId, HashInput, HashVerification, KeyInput, MessageHash, MessageVerification,
    RecoverableSignature, Verdict, SIGNATURE_LEN,
};
pub use domain::errors::SigningError;
pub use domain::hash::MAGIC_PREFIX;
pub use ports::inbound::MessageSigningApi;
pub use ports::outbound::{
    AddressCodec, AuthorizationOracle, KeyDerivationError, KeyDeriver, OracleError,
};
pub use service::MessageService;
