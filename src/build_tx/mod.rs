use cosmrs::{
    proto::{
        cosmos::{base::v1beta1::Coin as ProtoCoin, tx::v1beta1::TxRaw},
        cosmwasm::wasm::v1::MsgExecuteContract,
    },
    tx::{Body, Fee, MessageExt, SequenceNumber, SignMode, SignerInfo},
    AccountId, Any, Coin, Gas,
};
use prost::Message;

use crate::account::SignerAccount;

use self::error::Result;

pub mod error;

/// Caller-supplied transaction intent. `None` on `account`,
/// `gas_limit` and `fee_amount` means "unresolved — fetch from the
/// network"; zero and empty are legitimate resolved values.
#[derive(Debug, Clone)]
pub struct TxRequest {
    pub messages: Vec<Any>,
    pub memo: String,
    pub account: Option<SignerAccount>,
    pub gas_limit: Option<Gas>,
    pub fee_amount: Option<Vec<Coin>>,
    pub sign_mode: SignMode,
    pub fee_granter: Option<AccountId>,
    pub timeout_height: Option<u32>,
}

impl TxRequest {
    #[must_use]
    pub const fn new(messages: Vec<Any>) -> Self {
        Self {
            messages,
            memo: String::new(),
            account: None,
            gas_limit: None,
            fee_amount: None,
            sign_mode: SignMode::Unspecified,
            fee_granter: None,
            timeout_height: None,
        }
    }
}

/// Assembles the request's mutable fields into a buildable
/// transaction. Pure and idempotent; network-dependent resolution of
/// the remaining fields happens later, in the pipeline.
pub fn compose(request: &TxRequest) -> UnsignedTx {
    UnsignedTx {
        body: Body::new(
            request.messages.clone(),
            request.memo.clone(),
            request.timeout_height.unwrap_or_default(),
        ),
        sign_mode: if request.sign_mode == SignMode::Unspecified {
            SignMode::Direct
        } else {
            request.sign_mode
        },
        fee_granter: request.fee_granter.clone(),
    }
}

/// A composed, not yet signed transaction.
#[derive(Debug, Clone)]
pub struct UnsignedTx {
    body: Body,
    sign_mode: SignMode,
    fee_granter: Option<AccountId>,
}

impl UnsignedTx {
    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn sign_mode(&self) -> SignMode {
        self.sign_mode
    }

    #[must_use]
    pub fn fee_granter(&self) -> Option<&AccountId> {
        self.fee_granter.as_ref()
    }

    /// Builds the fee object from a resolved amount and gas limit,
    /// attaching the configured granter.
    #[must_use]
    pub fn fee(&self, amount: Vec<Coin>, gas_limit: Gas) -> Fee {
        Fee {
            amount,
            gas_limit,
            payer: None,
            granter: self.fee_granter.clone(),
        }
    }
}

/// Capability to export the transaction in its canonical protobuf
/// wire form, as the simulation and tax endpoints require. The
/// exported bytes carry a placeholder signature, without a public key
/// and with empty signature bytes, so the node accepts the
/// transaction's shape without a genuine signature.
pub trait WireEncode {
    fn to_wire_bytes(&self, sequence: SequenceNumber, fee: Fee) -> Vec<u8>;
}

impl WireEncode for UnsignedTx {
    fn to_wire_bytes(&self, sequence: SequenceNumber, fee: Fee) -> Vec<u8> {
        TxRaw {
            body_bytes: Message::encode_to_vec(&self.body.clone().into_proto()),
            auth_info_bytes: Message::encode_to_vec(
                &SignerInfo::single_direct(None, sequence)
                    .auth_info(fee)
                    .into_proto(),
            ),
            signatures: vec![Vec::new()],
        }
        .encode_to_vec()
    }
}

#[derive(Debug, Clone)]
struct Msg {
    message: Vec<u8>,
    funds: Vec<ProtoCoin>,
}

/// Convenience builder collecting contract-execution payloads and the
/// funds attached to each, rendered as protobuf messages for a
/// [`TxRequest`].
#[derive(Debug, Clone)]
pub struct ContractTx {
    contract: String,
    messages: Vec<Msg>,
}

impl ContractTx {
    #[must_use]
    pub const fn new(contract: String) -> Self {
        Self {
            contract,
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn add_message(mut self, message: Vec<u8>, funds: Vec<ProtoCoin>) -> Self {
        self.messages.push(Msg { message, funds });

        self
    }

    pub fn into_msgs(self, sender: &str) -> Result<Vec<Any>> {
        let buf = Vec::with_capacity(self.messages.len());

        self.messages
            .into_iter()
            .map(|msg| {
                MsgExecuteContract {
                    sender: sender.into(),
                    contract: self.contract.clone(),
                    msg: msg.message,
                    funds: msg.funds,
                }
                .to_any()
            })
            .try_fold(buf, |mut acc, msg| -> Result<Vec<Any>> {
                acc.push(msg?);

                Ok(acc)
            })
    }
}
