use cosmrs::tx::{Fee, SequenceNumber};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::{build_tx::WireEncode, client::Client, deadline::Deadline};

use super::TxBytes;

use self::error::Error;

pub mod error;

/// Result of a dry-run execution, consumed once to derive a gas
/// limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas_used: u64,
}

/// Submits the transaction, carrying a placeholder signature, for
/// dry-run execution and reports the gas it consumed. A rejected dry
/// run is terminal for the whole pipeline; there is no fallback gas
/// limit and no retry.
pub async fn simulate<T>(
    client: &Client,
    tx: &T,
    sequence: SequenceNumber,
    fee: Fee,
    deadline: Deadline,
) -> Result<GasEstimate, Error>
where
    T: WireEncode + Sync,
{
    let request = TxBytes::new(&tx.to_wire_bytes(sequence, fee));

    let url = format!("{}/cosmos/tx/v1beta1/simulate", client.lcd_url());

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
        return Err(Error::Rejected {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let SimulateResponse { gas_info } = serde_json::from_slice(&body)?;

    debug!(gas_used = gas_info.gas_used, "Transaction simulation succeeded.");

    Ok(GasEstimate {
        gas_used: gas_info.gas_used,
    })
}

#[derive(Deserialize)]
struct SimulateResponse {
    gas_info: GasInfo,
}

#[derive(Deserialize)]
struct GasInfo {
    #[serde(default, deserialize_with = "u64_from_dec_str")]
    gas_used: u64,
}

// The LCD gateway emits protobuf `uint64` fields as decimal strings.
fn u64_from_dec_str<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer)?
        .parse()
        .map_err(serde::de::Error::custom)
}
