use cosmrs::{
    tx::{Fee, SequenceNumber},
    Coin,
};
use serde::Deserialize;
use tracing::debug;

use crate::{build_tx::WireEncode, client::Client, deadline::Deadline};

use super::TxBytes;

use self::error::Error;

pub mod error;

/// Protocol tax owed on the transaction's messages, consumed once to
/// derive the final fee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tax {
    pub amount: Vec<Coin>,
}

/// Asks the node for the tax the protocol levies on the transaction's
/// messages. The transaction is transmitted in its canonical wire
/// form, which the [`WireEncode`] bound guarantees at compile time.
pub async fn compute_tax<T>(
    client: &Client,
    tx: &T,
    sequence: SequenceNumber,
    fee: Fee,
    deadline: Deadline,
) -> Result<Tax, Error>
where
    T: WireEncode + Sync,
{
    let request = TxBytes::new(&tx.to_wire_bytes(sequence, fee));

    let url = format!("{}/terra/tx/v1beta1/compute_tax", client.lcd_url());

    let response = deadline
        .bound(client.http().post(url).json(&request).send())
        .await?
        .map_err(Error::Connection)?;

    let status = response.status();

    let body = deadline
        .bound(response.bytes())
        .await?
        .map_err(Error::Connection)?;

    if !status.is_success() {
        return Err(Error::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let ComputeTaxResponse { tax_amount } = serde_json::from_slice(&body)?;

    let amount = tax_amount
        .into_iter()
        .map(|record| {
            record
                .amount
                .parse()
                .map_err(|_error| Error::ParseAmount(record.amount.clone()))
                .and_then(|amount: u128| {
                    Coin::new(amount, &record.denom).map_err(Error::InvalidCoin)
                })
        })
        .collect::<Result<Vec<Coin>, Error>>()?;

    debug!("Tax computation succeeded.");

    Ok(Tax { amount })
}

#[derive(Deserialize)]
struct ComputeTaxResponse {
    #[serde(default)]
    tax_amount: Vec<CoinRecord>,
}

#[derive(Deserialize)]
struct CoinRecord {
    denom: String,
    amount: String,
}
