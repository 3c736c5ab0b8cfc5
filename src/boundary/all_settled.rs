//! Best-effort aggregation of concurrently running fallible futures.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::fmt;
use std::mem;

use futures_core::Stream;
use futures_util::stream::FuturesUnordered;

use crate::types::kind;

use super::CaptureFuture;

/// A future that drives every unit to settlement and yields the successful values.
///
/// Units run concurrently on the polling task. Values are collected in the
/// order units settle, not the order they were submitted. A unit resolving to
/// `Err` or panicking is excluded and only counted.
///
/// # Examples
///
/// ```rust
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// use outcome_rail::boundary::AllSettled;
///
/// async fn unit(value: u8) -> Result<u8, &'static str> {
///     if value == 0 { Err("zero") } else { Ok(value) }
/// }
///
/// let mut settled = AllSettled::new([unit(1), unit(0), unit(2)]);
/// let values = (&mut settled).await;
///
/// assert_eq!(values, vec![1, 2]);
/// assert_eq!(settled.excluded(), 1);
/// # });
/// ```
#[must_use = "futures do nothing unless polled"]
pub struct AllSettled<Fut, T> {
    pending: FuturesUnordered<CaptureFuture<Fut>>,
    settled: Vec<T>,
    excluded: usize,
}

impl<Fut, T, E> AllSettled<Fut, T>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Starts tracking every unit yielded by `units`.
    pub fn new<I>(units: I) -> Self
    where
        I: IntoIterator<Item = Fut>,
    {
        let pending: FuturesUnordered<_> = units
            .into_iter()
            .map(|unit| CaptureFuture::new(unit, kind::CATCH_ASYNC))
            .collect();
        let settled = Vec::with_capacity(pending.len());
        Self { pending, settled, excluded: 0 }
    }
}

impl<Fut, T> AllSettled<Fut, T> {
    /// Number of units still running.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of units excluded so far because they failed or panicked.
    #[inline]
    pub fn excluded(&self) -> usize {
        self.excluded
    }
}

// Settled values are moved out, never pinned. `FuturesUnordered` is `Unpin` itself.
impl<Fut, T> Unpin for AllSettled<Fut, T> {}

impl<Fut, T, E> Future for AllSettled<Fut, T>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Vec<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        loop {
            match Pin::new(&mut this.pending).poll_next(cx) {
                Poll::Ready(Some(Ok(Ok(value)))) => this.settled.push(value),
                Poll::Ready(Some(Ok(Err(_)))) => {
                    this.excluded += 1;
                    debug_event!(excluded = this.excluded, "excluded rejected unit");
                },
                Poll::Ready(Some(Err(_panic))) => {
                    this.excluded += 1;
                    debug_event!(excluded = this.excluded, error = %_panic, "excluded panicked unit");
                },
                Poll::Ready(None) => return Poll::Ready(mem::take(&mut this.settled)),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<Fut, T> fmt::Debug for AllSettled<Fut, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllSettled")
            .field("pending", &self.pending.len())
            .field("settled", &self.settled.len())
            .field("excluded", &self.excluded)
            .finish()
    }
}
