use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use cosmrs::{Coin, Gas};
use serde::Serialize;
use tracing::debug;

use crate::{
    account::{self, SignerAccount},
    build_tx::{self, TxRequest, UnsignedTx},
    client::Client,
    config::Node,
    deadline::Deadline,
    signer::{SignedTx, Signer, SignerData},
};

use self::error::CreateAndSign as Error;

pub mod broadcast;
pub mod compute_tax;
pub mod error;
pub mod query;
pub mod simulate;

/// Completes a partial transaction request and signs it.
///
/// Fields the request leaves unresolved are filled in from the
/// network, in order: the signer account pair, the gas limit (from a
/// dry-run simulation), the fee (protocol tax plus the configured gas
/// price). Only then is the result bound into an immutable signed
/// transaction. Fails fast; no step retries or is skipped on error.
pub async fn create_and_sign(
    client: &Client,
    config: &Node,
    signer: &Signer,
    request: TxRequest,
    deadline: Deadline,
) -> Result<SignedTx, Error> {
    let unsigned: UnsignedTx = build_tx::compose(&request);

    let account: SignerAccount = match request.account {
        Some(account) => account,
        None => {
            let info = account::resolve(client, signer.address(), deadline).await?;

            SignerAccount::from(&info)
        }
    };

    let gas_limit: Gas = match request.gas_limit {
        Some(gas_limit) => gas_limit,
        None => {
            let estimate = simulate::simulate(
                client,
                &unsigned,
                account.sequence,
                unsigned.fee(request.fee_amount.clone().unwrap_or_default(), 0),
                deadline,
            )
            .await?;

            adjust_gas_limit(config, estimate.gas_used)
        }
    };

    let fee_amount: Vec<Coin> = match request.fee_amount {
        Some(amount) => amount,
        None => {
            let tax = compute_tax::compute_tax(
                client,
                &unsigned,
                account.sequence,
                unsigned.fee(Vec::new(), gas_limit),
                deadline,
            )
            .await?;

            with_gas_fee(config, tax.amount, gas_limit)?
        }
    };

    debug!(
        gas_limit,
        sequence = account.sequence,
        "Transaction parameters resolved."
    );

    signer
        .sign(
            &unsigned,
            unsigned.fee(fee_amount, gas_limit),
            &SignerData {
                account_number: account.account_number,
                sequence: account.sequence,
                chain_id: config.chain_id().clone(),
            },
        )
        .map_err(Into::into)
}

/// Buffers the simulated gas usage by the configured adjustment
/// factor, rounding up so the buffer never truncates back to the raw
/// estimate.
fn adjust_gas_limit(config: &Node, gas_used: Gas) -> Gas {
    let adjusted = (u128::from(gas_used)
        * u128::from(config.gas_adjustment_numerator().get()))
    .div_ceil(u128::from(config.gas_adjustment_denominator().get()));

    Gas::try_from(adjusted).unwrap_or(Gas::MAX)
}

/// Derives the final fee amount: the protocol tax plus the gas fee at
/// the configured per-unit price, rounded up and merged into the tax
/// multiset per denomination.
fn with_gas_fee(
    config: &Node,
    tax: Vec<Coin>,
    gas_limit: Gas,
) -> Result<Vec<Coin>, cosmrs::ErrorReport> {
    let gas_fee_amount = (u128::from(gas_limit)
        * u128::from(config.gas_price_numerator().get()))
    .div_ceil(u128::from(config.gas_price_denominator().get()));

    let gas_fee = Coin::new(gas_fee_amount, config.fee_denom())?;

    let mut amount = tax;

    match amount.iter_mut().find(|coin| coin.denom == gas_fee.denom) {
        Some(coin) => coin.amount += gas_fee.amount,
        None => amount.push(gas_fee),
    }

    // The node requires fee coins ordered by denomination.
    amount.sort_by_key(|coin| coin.denom.to_string());

    Ok(amount)
}

#[derive(Serialize)]
pub(crate) struct TxBytes {
    tx_bytes: String,
}

impl TxBytes {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        Self {
            tx_bytes: BASE64.encode(bytes),
        }
    }
}
