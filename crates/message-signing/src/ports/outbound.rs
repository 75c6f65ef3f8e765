//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits for the external collaborators this subsystem depends on: the
//! key-derivation service, the address codec, and the authorization oracle.
//! Implementations live outside this crate; tests inject doubles.

use crate::domain::entities::AccountId;
use crate::domain::errors::SigningError;
use k256::ecdsa::SigningKey;
use thiserror::Error;

/// Error from the key-derivation service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyDerivationError {
    /// The seed material could not be interpreted
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

impl From<KeyDerivationError> for SigningError {
    fn from(err: KeyDerivationError) -> Self {
        match err {
            KeyDerivationError::InvalidSeed(reason) => Self::InvalidSeed(reason),
        }
    }
}

/// Error from the authorization oracle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OracleError {
    /// The oracle connection is down
    #[error("oracle is not connected")]
    Unavailable,

    /// The query failed in transit
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<OracleError> for SigningError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::Unavailable => Self::OracleUnavailable,
            OracleError::Transport(reason) => Self::OracleTransport(reason),
        }
    }
}

/// Key-derivation service: turns seed material into a secret-key handle.
///
/// When no selector is given the service must return the key for its default
/// account.
pub trait KeyDeriver: Send + Sync {
    /// Derive the signing key for `selector` from `seed`.
    ///
    /// # Errors
    /// * `KeyDerivationError::InvalidSeed` - the material is not a usable seed
    fn derive(&self, seed: &str, selector: Option<u32>)
        -> Result<SigningKey, KeyDerivationError>;
}

/// Address codec: syntactic validity of account identifiers.
pub trait AddressCodec: Send + Sync {
    /// Whether `account` is a well-formed ledger address.
    fn is_valid_account(&self, account: &AccountId) -> bool;
}

/// Authorization oracle: current account/ledger state.
///
/// The oracle is queried fresh on every verification; verdicts are never
/// cached, since an account's signing-key set changes over time.
#[async_trait::async_trait]
pub trait AuthorizationOracle: Send + Sync {
    /// Whether the oracle connection is currently online.
    fn is_connected(&self) -> bool;

    /// Whether `public_key_hex` (compressed SEC1, hex) is presently an active
    /// signing key for `account`, per the oracle's current view.
    ///
    /// # Errors
    /// * `OracleError::Unavailable` - the connection dropped mid-query
    /// * `OracleError::Transport` - the query failed in transit
    async fn is_key_active_for_account(
        &self,
        public_key_hex: &str,
        account: &AccountId,
    ) -> Result<bool, OracleError>;
}
