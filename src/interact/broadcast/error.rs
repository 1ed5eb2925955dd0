use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error as ThisError;

use crate::deadline::Cancelled;

/// Stage at which the node rejected the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Submission,
    Mempool,
    Delivery,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Submission => "submission",
            Self::Mempool => "mempool admission",
            Self::Delivery => "block delivery",
        })
    }
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Failed to broadcast signed transaction! Cause: {0}")]
    Broadcast(#[from] cosmrs::rpc::Error),
    #[error(
        "Node rejected transaction at the {stage} stage! Code: {code}, codespace: {codespace}, log: {log}"
    )]
    Rejected {
        stage: Stage,
        code: u32,
        codespace: String,
        log: String,
    },
    #[error("{0}")]
    Cancelled(#[from] Cancelled),
}
