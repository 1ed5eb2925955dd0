use reqwest::StatusCode;
use thiserror::Error as ThisError;

use crate::deadline::Cancelled;

#[derive(Debug, ThisError)]
#[error("Failed to derive account ID from public key! Cause: {0}")]
pub struct AccountId(#[from] pub cosmrs::ErrorReport);

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Querying node for account data failed because of a connection error! Cause: {0}")]
    Connection(reqwest::Error),
    #[error("No account is associated with address \"{0}\" on the node!")]
    NotFound(String),
    #[error("Node responded with non-success status code {status}! Response body: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("Failed to deserialize account data from response! Cause: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("{0}")]
    Cancelled(#[from] Cancelled),
}

pub type AccountIdResult<T> = std::result::Result<T, AccountId>;

pub type Result<T> = std::result::Result<T, Error>;
