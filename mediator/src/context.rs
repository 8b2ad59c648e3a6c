//! Cancellation threading.

use tokio_util::sync::CancellationToken;

/// Cancellation signal passed positionally from the transport layer through
/// `dispatch` into handlers.
///
/// Handlers check it around suspension points so that work is not performed
/// on behalf of a caller that has already given up.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
}

/// Returned by [`RequestContext::ensure_active`] once the signal has fired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request was cancelled before completion")]
pub struct Cancelled;

impl RequestContext {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Errors once cancellation has been requested. Call before each
    /// suspension point that would commit work for the caller.
    pub fn ensure_active(&self) -> Result<(), Cancelled> {
        if self.cancel.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}
