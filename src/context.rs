// src/context.rs
//! Per-run execution context: an optional deadline plus an optional cancellation signal.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::error::CancellationError;

#[derive(Debug, Clone, Default)]
pub struct RunContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Trips the cancellation signal of every context cloned from the one it was paired with.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl RunContext {
    /// No deadline, never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancel: None,
        }
    }

    /// Attach a fresh cancellation signal, keeping the deadline.
    pub fn with_cancel(self) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        (
            Self {
                deadline: self.deadline,
                cancel: Some(rx),
            },
            CancelHandle { tx },
        )
    }

    /// Time left before the deadline, if any.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Non-blocking check. Explicit cancellation wins over an expired deadline.
    pub fn check(&self) -> Result<(), CancellationError> {
        if let Some(rx) = &self.cancel {
            if *rx.borrow() {
                return Err(CancellationError::Cancelled);
            }
        }
        if let Some(d) = self.deadline {
            if Instant::now() >= d {
                return Err(CancellationError::DeadlineExceeded);
            }
        }
        Ok(())
    }

    /// Resolves once the context is cancelled or its deadline passes.
    /// Never resolves for a background context.
    pub async fn done(&self) -> CancellationError {
        let cancelled = async {
            if let Some(rx) = &self.cancel {
                let mut rx = rx.clone();
                let tripped = rx.wait_for(|c| *c).await.is_ok();
                if tripped {
                    return;
                }
            }
            // sender dropped without cancelling, or no signal attached
            std::future::pending::<()>().await
        };
        let expired = async {
            match self.deadline {
                Some(d) => tokio::time::sleep_until(d).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => CancellationError::Cancelled,
            _ = expired => CancellationError::DeadlineExceeded,
        }
    }

    /// Drive `fut` to completion unless the context ends first; in that case `fut` is
    /// dropped and the cancellation reason is returned.
    pub async fn run<F, T, E>(&self, fut: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: From<CancellationError>,
    {
        self.check().map_err(E::from)?;
        tokio::select! {
            biased;
            reason = self.done() => Err(E::from(reason)),
            out = fut => out,
        }
    }
}
