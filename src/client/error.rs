use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Failed to construct LCD HTTP client! Cause: {0}")]
    LcdClient(#[from] reqwest::Error),
    #[error("Failed to set up tendermint JSON RPC client! Cause: {0}")]
    JsonRpcClient(#[from] cosmrs::rpc::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
