//! Cancellation scope for a view's network calls
//!
//! Calls started through a [`ViewScope`] are aborted when the scope is torn
//! down or dropped, so no response is delivered to a view that is gone.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinSet;
use tracing::debug;

/// The view was torn down before the call completed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Request cancelled: the view was closed")]
pub struct Cancelled;

/// Owns the in-flight calls of one view
pub struct ViewScope {
    name: String,
    tasks: JoinSet<()>,
}

impl ViewScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: JoinSet::new(),
        }
    }

    /// Run `call` inside the scope
    pub fn spawn<F, T>(&mut self, call: F) -> PendingCall<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        self.tasks.spawn(async move {
            // The receiver is gone when the caller stopped waiting
            let _ = sender.send(call.await);
        });
        PendingCall { receiver }
    }

    /// Abort every call still in flight
    pub fn teardown(&mut self) {
        if !self.tasks.is_empty() {
            debug!("Tearing down {} with {} task(s)", self.name, self.tasks.len());
        }
        self.tasks.abort_all();
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Result of a call started in a [`ViewScope`]
pub struct PendingCall<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T> Future for PendingCall<T> {
    type Output = Result<T, Cancelled>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.map_err(|_| Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_completed_call_delivers_result() {
        let mut scope = ViewScope::new("/rooms");
        let pending = scope.spawn(async { 42 });
        assert_eq!(pending.await, Ok(42));
    }

    #[tokio::test]
    async fn test_teardown_cancels_in_flight_calls() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let mut scope = ViewScope::new("/bookings");
        let pending = scope.spawn(async move {
            tokio::time::sleep(Duration::from_secs(30)).await;
            flag.store(true, Ordering::SeqCst);
        });

        scope.teardown();
        assert_eq!(pending.await, Err(Cancelled));
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_dropping_scope_cancels_calls() {
        let pending = {
            let mut scope = ViewScope::new("/guests");
            scope.spawn(std::future::pending::<()>())
        };
        assert_eq!(pending.await, Err(Cancelled));
    }
}
