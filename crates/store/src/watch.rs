//! Change notifications for store readers.

use dilse_core::Scope;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

/// Capacity of the change channel; slower readers see a lag, which is
/// reported as a change.
pub(crate) const CHANNEL_CAPACITY: usize = 64;

/// Receives a notification whenever rows of one scope (or of any scope) are
/// written.
///
/// Dropping the subscription unsubscribes.
pub struct ScopeSubscription {
    scope: Option<Scope>,
    rx: broadcast::Receiver<Scope>,
}

impl ScopeSubscription {
    pub(crate) fn new(scope: Option<Scope>, rx: broadcast::Receiver<Scope>) -> Self {
        Self { scope, rx }
    }

    /// Scope being watched, `None` when watching every scope
    #[must_use]
    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }

    /// Wait for the next write to the watched scope.
    ///
    /// Returns `false` once every store handle has been dropped.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.rx.recv().await {
                Ok(changed) => {
                    if self.scope.as_ref().is_none_or(|s| *s == changed) {
                        return true;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Change subscriber lagged");
                    return true;
                }
                Err(RecvError::Closed) => return false,
            }
        }
    }
}
