//! Future wrapper that turns panics raised while polling into structured failures.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::{StructuredError, StructuredResult};

use super::from_panic;

pin_project! {
    /// A future wrapper that catches panics raised by the inner future.
    ///
    /// Resolves to `Ok(output)` when the inner future completes, or to
    /// `Err(StructuredError)` tagged with the boundary kind if polling it
    /// panicked. The inner future is never polled again after a panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// use outcome_rail::boundary::CaptureFuture;
    ///
    /// async fn flaky(fail: bool) -> u32 {
    ///     if fail {
    ///         panic!("lost connection");
    ///     }
    ///     7
    /// }
    ///
    /// assert_eq!(CaptureFuture::new(flaky(false), "catchAsync").await, Ok(7));
    ///
    /// let err = CaptureFuture::new(flaky(true), "catchAsync").await.unwrap_err();
    /// assert_eq!(err.message(), "lost connection");
    /// # });
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CaptureFuture<Fut> {
        #[pin]
        future: Fut,
        kind: &'static str,
        settled: bool,
    }
}

impl<Fut> CaptureFuture<Fut> {
    /// Wraps `future`; a panic is reported with the given kind.
    #[inline]
    pub fn new(future: Fut, kind: &'static str) -> Self {
        Self { future, kind, settled: false }
    }
}

impl<Fut: Future> Future for CaptureFuture<Fut> {
    type Output = StructuredResult<Fut::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.settled, "CaptureFuture polled after completion");

        let future = this.future;
        let polled = panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx)));

        let output: Result<Fut::Output, StructuredError> = match polled {
            Ok(Poll::Ready(value)) => Ok(value),
            Ok(Poll::Pending) => return Poll::Pending,
            Err(payload) => Err(from_panic(*this.kind, payload)),
        };
        *this.settled = true;
        Poll::Ready(output)
    }
}

impl<Fut: Future> FusedFuture for CaptureFuture<Fut> {
    fn is_terminated(&self) -> bool {
        self.settled
    }
}
