use cosmrs::{
    crypto::secp256k1::SigningKey,
    tx::{AccountNumber, SequenceNumber},
    AccountId,
};
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::{client::Client, config::Node, deadline::Deadline};

use self::error::{AccountIdResult, Error, Result as ModuleResult};

pub mod error;

/// Signer position within the account's transaction history. The two
/// numbers are resolved and applied strictly as a pair; a request
/// cannot carry one half without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignerAccount {
    pub account_number: AccountNumber,
    pub sequence: SequenceNumber,
}

/// Resolved signer identity as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub address: String,
    pub account_number: AccountNumber,
    pub sequence: SequenceNumber,
}

impl From<&AccountInfo> for SignerAccount {
    fn from(info: &AccountInfo) -> Self {
        Self {
            account_number: info.account_number,
            sequence: info.sequence,
        }
    }
}

pub fn account_id(config: &Node, signing_key: &SigningKey) -> AccountIdResult<AccountId> {
    signing_key
        .public_key()
        .account_id(config.address_prefix())
        .map_err(Into::into)
}

/// Fetches the address' current account number and sequence. Always a
/// fresh network read; sequence numbers go stale after every confirmed
/// transaction, so results are never cached.
pub async fn resolve(
    client: &Client,
    address: &str,
    deadline: Deadline,
) -> ModuleResult<AccountInfo> {
    let url = format!("{}/cosmos/auth/v1beta1/accounts/{address}", client.lcd_url());

    let response = deadline
        .bound(client.http().get(url).send())
        .await?
        .map_err(Error::Connection)?;

    let status = response.status();

    let body = deadline
        .bound(response.bytes())
        .await?
        .map_err(Error::Connection)?;

    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound(address.into()));
    }

    if !status.is_success() {
        return Err(Error::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let QueryAccountResponse { account } = serde_json::from_slice(&body)?;

    debug!("Account data for {address} resolved successfully.");

    let record = match account {
        AccountRecord::Wrapped { base_account } | AccountRecord::Base(base_account) => base_account,
    };

    Ok(AccountInfo {
        address: record.address,
        account_number: record.account_number,
        sequence: record.sequence,
    })
}

#[derive(Deserialize)]
struct QueryAccountResponse {
    account: AccountRecord,
}

// Vesting and module accounts wrap the base record; plain accounts
// carry its fields inline.
#[derive(Deserialize)]
#[serde(untagged)]
enum AccountRecord {
    Wrapped { base_account: BaseAccountRecord },
    Base(BaseAccountRecord),
}

#[derive(Deserialize)]
struct BaseAccountRecord {
    #[serde(default)]
    address: String,
    #[serde(default, deserialize_with = "u64_from_dec_str")]
    account_number: u64,
    #[serde(default, deserialize_with = "u64_from_dec_str")]
    sequence: u64,
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
