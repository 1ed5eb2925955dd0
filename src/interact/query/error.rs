use reqwest::StatusCode;
use thiserror::Error as ThisError;

use crate::deadline::Cancelled;

#[derive(Debug, ThisError)]
pub enum Wasm {
    #[error("Failed to serialize query message to JSON! Cause: {0}")]
    SerializeQuery(#[from] serde_json_wasm::ser::Error),
    #[error("Connection failure occurred! Cause: {0}")]
    Connection(reqwest::Error),
    #[error("Node responded with non-success status code {status}! Response body: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("Failed to deserialize smart contract's query response from JSON! Cause: {0}")]
    DeserializeResponse(#[from] serde_json::Error),
    #[error("{0}")]
    Cancelled(#[from] Cancelled),
}

#[derive(Debug, ThisError)]
pub enum WasmAbci {
    #[error("Failed to serialize query parameters to JSON! Cause: {0}")]
    SerializeQuery(#[from] serde_json::Error),
    #[error("Error occurred while communicating with RPC endpoint! Cause: {0}")]
    Rpc(#[from] cosmrs::rpc::Error),
    #[error("Contract store query failed with code {code}! Log: {log}")]
    Query { code: u32, log: String },
    #[error("Failed to deserialize smart contract's query response from JSON! Cause: {0}")]
    DeserializeResponse(#[from] serde_json_wasm::de::Error),
    #[error("{0}")]
    Cancelled(#[from] Cancelled),
}

#[derive(Debug, ThisError)]
pub enum TxSearch {
    #[error("Error occurred while communicating with RPC endpoint! Cause: {0}")]
    Rpc(#[from] cosmrs::rpc::Error),
    #[error("{0}")]
    Cancelled(#[from] Cancelled),
}
