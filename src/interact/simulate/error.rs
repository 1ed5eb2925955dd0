use reqwest::StatusCode;
use thiserror::Error as ThisError;

use crate::deadline::Cancelled;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Connection failure occurred while running simulation! Cause: {0}")]
    Connection(reqwest::Error),
    #[error("Attempt to run simulation was rejected by the node! Status code: {status}. Response: {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("Failed to deserialize simulation response! Cause: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("{0}")]
    Cancelled(#[from] Cancelled),
}
