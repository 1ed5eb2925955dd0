use std::{num::NonZeroU64, path::Path, time::Duration};

use cosmrs::tendermint::chain::Id as ChainId;
use serde::{
    de::{DeserializeOwned, Error as DeserializeError},
    Deserialize, Deserializer, Serialize,
};
use tokio::fs::read_to_string;

use self::error::Result as ModuleResult;

pub mod error;

/// Node endpoints plus the fee and gas policy applied when a request
/// leaves the respective fields unresolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
#[serde(rename_all = "snake_case")]
pub struct Node {
    lcd_url: String,
    json_rpc_url: String,
    address_prefix: String,
    #[serde(deserialize_with = "deserialize_chain_id")]
    chain_id: ChainId,
    fee_denom: String,
    gas_adjustment_numerator: NonZeroU64,
    gas_adjustment_denominator: NonZeroU64,
    gas_price_numerator: NonZeroU64,
    gas_price_denominator: NonZeroU64,
    #[serde(default)]
    http_timeout_seconds: Option<u64>,
}

impl Node {
    pub fn lcd_url(&self) -> &str {
        &self.lcd_url
    }

    pub fn json_rpc_url(&self) -> &str {
        &self.json_rpc_url
    }

    pub fn address_prefix(&self) -> &str {
        &self.address_prefix
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn fee_denom(&self) -> &str {
        &self.fee_denom
    }

    pub fn gas_adjustment_numerator(&self) -> NonZeroU64 {
        self.gas_adjustment_numerator
    }

    pub fn gas_adjustment_denominator(&self) -> NonZeroU64 {
        self.gas_adjustment_denominator
    }

    pub fn gas_price_numerator(&self) -> NonZeroU64 {
        self.gas_price_numerator
    }

    pub fn gas_price_denominator(&self) -> NonZeroU64 {
        self.gas_price_denominator
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_seconds.map(Duration::from_secs)
    }
}

impl AsRef<Self> for Node {
    fn as_ref(&self) -> &Self {
        self
    }
}

fn deserialize_chain_id<'de, D>(deserializer: D) -> Result<ChainId, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer)?
        .parse()
        .map_err(DeserializeError::custom)
}

pub async fn read_config<C, P>(path: P) -> ModuleResult<C>
where
    C: DeserializeOwned + AsRef<Node>,
    P: AsRef<Path>,
{
    toml::from_str(&read_to_string(path).await?).map_err(Into::into)
}
