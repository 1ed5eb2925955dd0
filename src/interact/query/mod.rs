use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use cosmrs::rpc::{
    endpoint::tx_search::Response as TxSearchResponse, query::Query, Client as _, Order,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    account::{self, AccountInfo},
    client::Client,
    deadline::Deadline,
};

pub mod error;

/// Read path for account state; shares its implementation with the
/// pipeline's account resolver.
pub async fn account_data(
    client: &Client,
    address: &str,
    deadline: Deadline,
) -> account::error::Result<AccountInfo> {
    account::resolve(client, address, deadline).await
}

/// Queries a smart contract's store over the LCD interface. The
/// opaque query message is serialized to JSON and base64-encoded into
/// the `query_msg` parameter; the node's whole JSON response body is
/// decoded into the caller-supplied shape.
pub async fn wasm_smart<Q, R>(
    client: &Client,
    contract_address: &str,
    query: &Q,
    deadline: Deadline,
) -> Result<R, error::Wasm>
where
    Q: Serialize + ?Sized + Sync,
    R: DeserializeOwned,
{
    let query_msg = BASE64.encode(serde_json_wasm::to_vec(query)?);

    let url = format!(
        "{}/terra/wasm/v1beta1/contracts/{contract_address}/store",
        client.lcd_url()
    );

    let response = deadline
        .bound(
            client
                .http()
                .get(url)
                .query(&[("query_msg", query_msg.as_str())])
                .send(),
        )
        .await?
        .map_err(error::Wasm::Connection)?;

    let status = response.status();

    let body = deadline
        .bound(response.bytes())
        .await?
        .map_err(error::Wasm::Connection)?;

    if !status.is_success() {
        return Err(error::Wasm::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    serde_json::from_slice(&body).map_err(Into::into)
}

/// Queries a smart contract's store over the node's ABCI interface.
/// The RPC layer hex-encodes the query payload in transit.
pub async fn wasm_smart_abci<Q, R>(
    client: &Client,
    contract_address: &str,
    query: &Q,
    deadline: Deadline,
) -> Result<R, error::WasmAbci>
where
    Q: Serialize + ?Sized + Sync,
    R: DeserializeOwned,
{
    const CONTRACT_STORE_PATH: &str = "custom/wasm/contractStore";

    let data = serde_json::to_vec(&ContractStoreParams {
        contract_address,
        msg: query,
    })?;

    let response = deadline
        .bound(
            client
                .json_rpc()
                .abci_query(Some(CONTRACT_STORE_PATH.into()), data, None, false),
        )
        .await??;

    if response.code.is_err() {
        return Err(error::WasmAbci::Query {
            code: response.code.value(),
            log: response.log.to_string(),
        });
    }

    serde_json_wasm::from_slice(&response.value).map_err(Into::into)
}

/// Query-by-tag transaction search, passed through to the node's
/// native search endpoint.
pub async fn tx_search(
    client: &Client,
    query: Query,
    prove: bool,
    page: u32,
    per_page: u8,
    order: Order,
    deadline: Deadline,
) -> Result<TxSearchResponse, error::TxSearch> {
    deadline
        .bound(
            client
                .json_rpc()
                .tx_search(query, prove, page, per_page, order),
        )
        .await?
        .map_err(Into::into)
}

#[derive(Serialize)]
struct ContractStoreParams<'r, Q>
where
    Q: Serialize + ?Sized,
{
    contract_address: &'r str,
    msg: &'r Q,
}
