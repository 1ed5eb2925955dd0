use std::{future::Future, time::Duration};

use thiserror::Error as ThisError;
use tokio::time::{timeout_at, Instant};

/// Caller-initiated abort signal, checked at every network suspension
/// point of a pipeline invocation.
#[derive(Debug, Clone, Copy, Default)]
pub enum Deadline {
    #[default]
    None,
    At(Instant),
}

impl Deadline {
    #[must_use]
    pub fn after(duration: Duration) -> Self {
        Self::At(Instant::now() + duration)
    }

    /// Runs the future to completion unless the deadline elapses
    /// first, in which case the future is dropped mid-flight.
    pub async fn bound<F>(self, future: F) -> Result<F::Output, Cancelled>
    where
        F: Future,
    {
        match self {
            Self::None => Ok(future.await),
            Self::At(deadline) => timeout_at(deadline, future)
                .await
                .map_err(|_elapsed| Cancelled),
        }
    }
}

#[derive(Debug, ThisError)]
#[error("Operation was aborted because its deadline elapsed!")]
pub struct Cancelled;
