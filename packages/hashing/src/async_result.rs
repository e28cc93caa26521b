//! Async hash result resolved from a blocking-pool computation

use crate::{HashError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Future resolving to the outcome of an offloaded hash computation
pub struct AsyncHashResult<T> {
    receiver: oneshot::Receiver<Result<T>>,
}

/// Async hash result with a user-defined result handler
pub struct AsyncHashResultWithHandler<T, F> {
    receiver: oneshot::Receiver<Result<T>>,
    handler: Option<F>,
}

impl<T> AsyncHashResult<T> {
    /// Create a new `AsyncHashResult` from a oneshot receiver
    pub(crate) fn new(receiver: oneshot::Receiver<Result<T>>) -> Self {
        Self { receiver }
    }

    /// Create an `AsyncHashResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<T>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Create an `AsyncHashResult` that yields an error
    #[must_use]
    pub fn error(error: HashError) -> Self {
        Self::ready(Err(error))
    }

    /// Map the outcome through `handler` once it is available
    pub fn on_result<F, U>(self, handler: F) -> AsyncHashResultWithHandler<T, F>
    where
        F: FnOnce(Result<T>) -> U,
    {
        AsyncHashResultWithHandler {
            receiver: self.receiver,
            handler: Some(handler),
        }
    }
}

impl<T> Future for AsyncHashResult<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => {
                Poll::Ready(Err(HashError::internal("Hash resolution task dropped")))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T, F, U> Future for AsyncHashResultWithHandler<T, F>
where
    F: FnOnce(Result<T>) -> U + Unpin,
{
    type Output = U;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // Polling again after completion must not call the handler twice.
        if this.handler.is_none() {
            return Poll::Pending;
        }

        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(_)) => Err(HashError::internal("Hash resolution task dropped")),
            Poll::Pending => return Poll::Pending,
        };

        match this.handler.take() {
            Some(handler) => Poll::Ready(handler(result)),
            None => Poll::Pending,
        }
    }
}
