use cosmrs::tx::SignMode;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Signing of transaction data failed! Cause: {0}")]
    Signing(#[from] cosmrs::ErrorReport),
    #[error("Sign mode {0:?} is not supported by this signer!")]
    UnsupportedSignMode(SignMode),
}

pub type Result<T> = std::result::Result<T, Error>;
