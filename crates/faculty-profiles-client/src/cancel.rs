//! Mount-scoped cancellation for in-flight requests.
//!
//! A component owns a [`CancelGuard`] for its mount lifetime and threads
//! [`CancelToken`]s into every network call it starts. When the guard is
//! dropped (or cancelled explicitly), pending calls resolve to
//! [`ApiError::Cancelled`], which callers treat as "ignore" rather than an
//! error to display.

use tokio::sync::watch;

use crate::error::{ApiError, ApiResult};

/// Cancels all derived tokens when dropped.
#[derive(Debug)]
pub struct CancelGuard {
    tx: watch::Sender<bool>,
}

impl CancelGuard {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Mints a token observing this guard.
    #[must_use]
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }

    /// Cancels immediately instead of waiting for drop.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl Default for CancelGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(true);
    }
}

/// Observer half of a [`CancelGuard`].
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// A token that can never be cancelled, for call sites without a mount
    /// lifetime (e.g. one-shot CLI flows).
    #[must_use]
    pub fn never() -> Self {
        let (tx, rx) = watch::channel(false);
        // Leak the sender so the channel stays open.
        std::mem::forget(tx);
        Self { rx }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Races `fut` against cancellation.
    ///
    /// Resolves to [`ApiError::Cancelled`] as soon as the token is cancelled,
    /// and re-checks the token after completion so no state mutation happens
    /// on a disposed component.
    ///
    /// ## Errors
    /// Propagates the future's error, or [`ApiError::Cancelled`].
    pub async fn wrap<T>(&self, fut: impl Future<Output = ApiResult<T>>) -> ApiResult<T> {
        let mut rx = self.rx.clone();
        tokio::select! {
            // Both "flag flipped" and "guard dropped" mean cancellation.
            _ = rx.wait_for(|cancelled| *cancelled) => Err(ApiError::Cancelled),
            outcome = fut => {
                if self.is_cancelled() {
                    Err(ApiError::Cancelled)
                } else {
                    outcome
                }
            }
        }
    }
}
