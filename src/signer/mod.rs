use cosmrs::{
    crypto::{secp256k1::SigningKey, PublicKey},
    tendermint::chain::Id as ChainId,
    tx::{AccountNumber, Fee, SequenceNumber, SignDoc, SignMode, SignerInfo},
    AccountId, Coin, Gas,
};

use crate::{account, build_tx::UnsignedTx, config::Node};

use self::error::{Error, Result as ModuleResult};

pub mod error;

/// Signer identity: the key and its on-chain address. Holds no
/// transport handle and no cached sequence number; account state is
/// resolved fresh per pipeline invocation, so any number of signers
/// may share one transport client.
pub struct Signer {
    key: SigningKey,
    account_id: AccountId,
}

/// Chain-level metadata bound into the signature.
#[derive(Debug, Clone)]
pub struct SignerData {
    pub account_number: AccountNumber,
    pub sequence: SequenceNumber,
    pub chain_id: ChainId,
}

impl Signer {
    #[must_use]
    pub const fn new(key: SigningKey, account_id: AccountId) -> Self {
        Self { key, account_id }
    }

    pub fn from_config(
        config: &Node,
        key: SigningKey,
    ) -> account::error::AccountIdResult<Self> {
        account::account_id(config, &key).map(|account_id| Self::new(key, account_id))
    }

    #[must_use]
    pub fn address(&self) -> &str {
        self.account_id.as_ref()
    }

    #[must_use]
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        self.key.public_key()
    }

    /// Binds the resolved fee and signer metadata to the transaction
    /// and signs over the canonical bytes. Must run only after every
    /// optional field has been resolved; the produced transaction is
    /// immutable, so a signature can never cover stale bytes.
    pub fn sign(
        &self,
        tx: &UnsignedTx,
        fee: Fee,
        signer_data: &SignerData,
    ) -> ModuleResult<SignedTx> {
        if tx.sign_mode() != SignMode::Direct {
            return Err(Error::UnsupportedSignMode(tx.sign_mode()));
        }

        let auth_info = SignerInfo::single_direct(Some(self.public_key()), signer_data.sequence)
            .auth_info(fee.clone());

        SignDoc::new(
            tx.body(),
            &auth_info,
            &signer_data.chain_id,
            signer_data.account_number,
        )?
        .sign(&self.key)?
        .to_bytes()
        .map(|bytes| SignedTx { bytes, fee })
        .map_err(Into::into)
    }
}

/// A fully-resolved, signed transaction. Constructed only by
/// [`Signer::sign`] and immutable afterwards; it owns the serialized
/// bytes together with the fee and gas limit they were signed over.
#[derive(Debug, Clone)]
pub struct SignedTx {
    bytes: Vec<u8>,
    fee: Fee,
}

impl SignedTx {
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[must_use]
    pub fn fee(&self) -> &Fee {
        &self.fee
    }

    #[must_use]
    pub fn fee_amount(&self) -> &[Coin] {
        &self.fee.amount
    }

    #[must_use]
    pub fn gas_limit(&self) -> Gas {
        self.fee.gas_limit
    }
}
