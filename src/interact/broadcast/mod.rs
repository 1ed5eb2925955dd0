use cosmrs::{
    rpc::Client as _,
    tendermint::{
        abci::{
            response::{CheckTx, DeliverTx},
            Code,
        },
        Hash,
    },
};
use tracing::debug;

use crate::{client::Client, deadline::Deadline, signer::SignedTx};

use self::error::{Error, Stage};

pub mod error;

/// Delivery semantics of a broadcast call. No mode retries and no
/// mode transitions happen within a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fire-and-forget; returns before the mempool admission check
    /// completes.
    Async,
    /// Waits for the mempool admission check only.
    Sync,
    /// Waits for full block inclusion.
    Commit,
}

/// Guarantee strength of a successful broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Accepted for submission; delivery was not awaited.
    Admitted,
    /// Executed within a committed block.
    Delivered,
}

/// Mode-independent broadcast outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub code: Code,
    pub data: Vec<u8>,
    pub log: String,
    pub codespace: String,
    pub hash: Hash,
    pub confirmation: Confirmation,
}

/// Submits the signed transaction bytes under the requested delivery
/// mode. A nonzero application code at any stage is an error carrying
/// the node's diagnostic log; concurrent submissions for the same
/// account surface their sequence conflict here and are never
/// retried internally.
pub async fn broadcast(
    client: &Client,
    tx: &SignedTx,
    mode: Mode,
    deadline: Deadline,
) -> Result<Response, Error> {
    let tx_bytes: Vec<u8> = tx.bytes().to_vec();

    let rpc = client.json_rpc();

    let response = match mode {
        Mode::Async => {
            let response = deadline.bound(rpc.broadcast_tx_async(tx_bytes)).await??;

            admitted(
                Stage::Submission,
                response.code,
                response.data.into(),
                response.log,
                response.codespace,
                response.hash,
            )
        }
        Mode::Sync => {
            let response = deadline.bound(rpc.broadcast_tx_sync(tx_bytes)).await??;

            admitted(
                Stage::Mempool,
                response.code,
                response.data.into(),
                response.log,
                response.codespace,
                response.hash,
            )
        }
        Mode::Commit => {
            let response = deadline.bound(rpc.broadcast_tx_commit(tx_bytes)).await??;

            delivered(response.check_tx, response.deliver_tx, response.hash)
        }
    }?;

    debug!(hash = %response.hash, "Transaction broadcast accepted.");

    Ok(response)
}

fn admitted(
    stage: Stage,
    code: Code,
    data: Vec<u8>,
    log: String,
    codespace: String,
    hash: Hash,
) -> Result<Response, Error> {
    if code.is_err() {
        return Err(Error::Rejected {
            stage,
            code: code.value(),
            codespace,
            log,
        });
    }

    Ok(Response {
        code,
        data,
        log,
        codespace,
        hash,
        confirmation: Confirmation::Admitted,
    })
}

// Commit responses expose both consensus stages; a mempool pass alone
// is not success.
fn delivered(check_tx: CheckTx, deliver_tx: DeliverTx, hash: Hash) -> Result<Response, Error> {
    if check_tx.code.is_err() {
        return Err(Error::Rejected {
            stage: Stage::Mempool,
            code: check_tx.code.value(),
            codespace: check_tx.codespace,
            log: check_tx.log,
        });
    }

    if deliver_tx.code.is_err() {
        return Err(Error::Rejected {
            stage: Stage::Delivery,
            code: deliver_tx.code.value(),
            codespace: deliver_tx.codespace,
            log: deliver_tx.log,
        });
    }

    Ok(Response {
        code: deliver_tx.code,
        data: deliver_tx.data.into(),
        log: deliver_tx.log,
        codespace: deliver_tx.codespace,
        hash,
        confirmation: Confirmation::Delivered,
    })
}
