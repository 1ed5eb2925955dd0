use reqwest::StatusCode;
use thiserror::Error as ThisError;

use crate::deadline::Cancelled;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Connection failure occurred while computing tax! Cause: {0}")]
    Connection(reqwest::Error),
    #[error("Node responded with non-success status code {status}! Response body: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("Failed to deserialize tax computation response! Cause: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("Failed to parse tax amount \"{0}\" as an unsigned integer!")]
    ParseAmount(String),
    #[error("Failed to construct tax coin! Cause: {0}")]
    InvalidCoin(cosmrs::ErrorReport),
    #[error("{0}")]
    Cancelled(#[from] Cancelled),
}
