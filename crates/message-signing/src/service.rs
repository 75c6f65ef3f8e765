//! # Message Service
//!
//! Application service that implements [`MessageSigningApi`], wiring the pure
//! domain logic to the three outbound collaborators: key deriver, address
//! codec, and authorization oracle.

use crate::domain::entities::{
    AccountId, HashInput, HashVerification, KeyInput, MessageHash, MessageVerification,
    RecoverableSignature, Verdict,
};
use crate::domain::errors::SigningError;
use crate::domain::{codec, hash, recovery, signing};
use crate::ports::inbound::MessageSigningApi;
use crate::ports::outbound::{AddressCodec, AuthorizationOracle, KeyDeriver};
use k256::ecdsa::SigningKey;
use tracing::{debug, warn};

/// Message signing and verification service.
///
/// Holds no mutable state of its own; independent calls may run concurrently.
/// Verification queries the oracle fresh on every call — verdicts are never
/// cached, since a stale answer about an account's signing keys is a security
/// hazard.
pub struct MessageService<K, C, O> {
    deriver: K,
    addresses: C,
    oracle: O,
}

impl<K, C, O> MessageService<K, C, O>
where
    K: KeyDeriver,
    C: AddressCodec,
    O: AuthorizationOracle,
{
    /// Create a new service from its collaborators.
    pub fn new(deriver: K, addresses: C, oracle: O) -> Self {
        Self {
            deriver,
            addresses,
            oracle,
        }
    }

    /// Resolve a key input to a usable signing key.
    ///
    /// Direct handles pass through unchanged; seed material goes to the
    /// key-derivation service, whose errors propagate as `InvalidSeed`.
    fn resolve_signing_key(&self, key: KeyInput) -> Result<SigningKey, SigningError> {
        match key {
            KeyInput::Direct(key) => Ok(key),
            KeyInput::Seed { material, selector } => {
                Ok(self.deriver.derive(&material, selector)?)
            }
        }
    }

    fn sign_canonical(&self, hash: MessageHash, key: KeyInput) -> Result<String, SigningError> {
        let key = self.resolve_signing_key(key)?;
        let signature = signing::sign_hash(&hash, &key)?;
        Ok(codec::encode(&signature.to_bytes()))
    }

    /// The verification pipeline after hash normalization.
    ///
    /// Strictly ordered: the oracle query is the only costly step and must
    /// never run on input that an earlier check rejects.
    async fn verify_canonical(
        &self,
        hash: MessageHash,
        account: AccountId,
        signature: String,
    ) -> Result<Verdict, SigningError> {
        if !self.addresses.is_valid_account(&account) {
            return Err(SigningError::InvalidAccount(account.to_string()));
        }

        let signature_bytes = codec::decode(&signature)?;

        if !self.oracle.is_connected() {
            return Err(SigningError::OracleUnavailable);
        }

        let signature = RecoverableSignature::from_bytes(&signature_bytes)?;
        let public_key = recovery::recover_public_key(&hash, &signature)?;
        let public_key_hex = recovery::compressed_hex(&public_key);
        debug!(
            "recovered signer {} for account {}, querying oracle",
            public_key_hex, account
        );

        let valid = self
            .oracle
            .is_key_active_for_account(&public_key_hex, &account)
            .await?;
        if !valid {
            warn!("key {} is not active for account {}", public_key_hex, account);
        }

        Ok(Verdict {
            valid,
            public_key: public_key_hex,
        })
    }
}

#[async_trait::async_trait]
impl<K, C, O> MessageSigningApi for MessageService<K, C, O>
where
    K: KeyDeriver,
    C: AddressCodec,
    O: AuthorizationOracle,
{
    fn sign_message(&self, message: &str, key: KeyInput) -> Result<String, SigningError> {
        self.sign_canonical(hash::message_digest(message), key)
    }

    fn sign_hash(&self, hash: HashInput, key: KeyInput) -> Result<String, SigningError> {
        let hash = hash::normalize(hash)?;
        self.sign_canonical(hash, key)
    }

    async fn verify_message_signature(
        &self,
        request: MessageVerification,
    ) -> Result<Verdict, SigningError> {
        let digest = hash::message_digest(&request.message);
        self.verify_canonical(digest, request.account, request.signature)
            .await
    }

    async fn verify_hash_signature(
        &self,
        request: HashVerification,
    ) -> Result<Verdict, SigningError> {
        let hash = hash::normalize(request.hash)?;
        self.verify_canonical(hash, request.account, request.signature)
            .await
    }
}
