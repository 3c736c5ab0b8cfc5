//! Capture boundaries converting panics and foreign errors into structured outcomes.
//!
//! Every function here is total: whatever the wrapped work does, the caller
//! gets a [`StructuredResult`] back and nothing unwinds past the boundary.
//!
//! | Function | Work | Failure kind |
//! |----------|------|--------------|
//! | [`catch_sync`] | `FnOnce() -> T` | `catchSync` |
//! | [`try_sync`] | `FnOnce() -> Result<T, E>` | `catchSync` |
//! | [`catch_async`] | `FnOnce() -> impl Future<Output = T>` | `catchAsync` |
//! | [`try_async`] | `FnOnce() -> impl Future<Output = Result<T, E>>` | `catchAsync` |
//! | [`catch_async_all`] | `FnOnce() -> impl IntoIterator<Item = Fut>` | `catchAsync` |
//!
//! A panic carrying a `&str` or `String` becomes an error of the boundary's
//! kind with the panic message. A panic raised with
//! [`std::panic::panic_any`] and a [`StructuredError`] payload passes that
//! error through unchanged. Any other payload yields the
//! [`kind::UNREACHABLE`] sentinel.
//!
//! Panics still reach the installed panic hook before they are captured, so
//! the default hook prints them to stderr.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::boundary::catch_sync;
//!
//! let captured = catch_sync(|| -> u32 { panic!("boom") });
//! let err = captured.unwrap_err();
//!
//! assert_eq!(err.kind(), "catchSync");
//! assert_eq!(err.message(), "boom");
//! ```

use std::any::Any;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

use crate::types::{kind, StructuredError, StructuredResult};

#[cfg(feature = "async")]
mod all_settled;
#[cfg(feature = "async")]
mod capture_future;

#[cfg(feature = "async")]
pub use all_settled::AllSettled;
#[cfg(feature = "async")]
pub use capture_future::CaptureFuture;

/// Runs `work`, converting a panic into a `catchSync` failure.
#[inline]
pub fn catch_sync<T, F>(work: F) -> StructuredResult<T>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(work)).map_err(|payload| from_panic(kind::CATCH_SYNC, payload))
}

/// Runs fallible `work`, converting both panics and returned errors into
/// `catchSync` failures.
///
/// A returned error that is already a [`StructuredError`] passes through
/// unchanged; any other error becomes the cause of a `catchSync` error with
/// the same message.
///
/// # Examples
///
/// ```
/// use outcome_rail::boundary::try_sync;
///
/// let err = try_sync(|| "12x".parse::<u8>()).unwrap_err();
/// assert_eq!(err.kind(), "catchSync");
/// assert_eq!(err.message(), "invalid digit found in string");
/// ```
#[inline]
pub fn try_sync<T, E, F>(work: F) -> StructuredResult<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    catch_sync(work).and_then(|result| result.map_err(|error| from_error(kind::CATCH_SYNC, error)))
}

/// Runs `work` and awaits the future it returns, converting a panic in either
/// step into a `catchAsync` failure.
///
/// # Examples
///
/// ```
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// use outcome_rail::boundary::catch_async;
///
/// let value = catch_async(|| async { 21 * 2 }).await;
/// assert_eq!(value, Ok(42));
/// # });
/// ```
#[cfg(feature = "async")]
pub async fn catch_async<F, Fut>(work: F) -> StructuredResult<Fut::Output>
where
    F: FnOnce() -> Fut,
    Fut: core::future::Future,
{
    let future = panic::catch_unwind(AssertUnwindSafe(work))
        .map_err(|payload| from_panic(kind::CATCH_ASYNC, payload))?;
    CaptureFuture::new(future, kind::CATCH_ASYNC).await
}

/// Async counterpart of [`try_sync`]: panics and returned errors both become
/// `catchAsync` failures.
#[cfg(feature = "async")]
pub async fn try_async<F, Fut, T, E>(work: F) -> StructuredResult<T>
where
    F: FnOnce() -> Fut,
    Fut: core::future::Future<Output = Result<T, E>>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    catch_async(work)
        .await
        .and_then(|result| result.map_err(|error| from_error(kind::CATCH_ASYNC, error)))
}

/// Runs a batch of futures concurrently and collects the values of the ones
/// that succeed, in settlement order.
///
/// Units that return `Err` or panic are left out of the result; they are not
/// reported individually. Only a panic inside `work` itself, while building
/// the batch, yields a `catchAsync` failure. There is no timeout: a unit that
/// never settles keeps the aggregate pending.
///
/// # Examples
///
/// ```
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// use outcome_rail::boundary::catch_async_all;
///
/// async fn unit(value: i32) -> Result<i32, String> {
///     if value % 2 == 0 { Err(format!("{} rejected", value)) } else { Ok(value) }
/// }
///
/// let values = catch_async_all(|| (1..=3).map(unit)).await;
/// assert_eq!(values, Ok(vec![1, 3]));
/// # });
/// ```
#[cfg(feature = "async")]
pub async fn catch_async_all<F, I, Fut, T, E>(work: F) -> StructuredResult<Vec<T>>
where
    F: FnOnce() -> I,
    I: IntoIterator<Item = Fut>,
    Fut: core::future::Future<Output = Result<T, E>>,
{
    let units = panic::catch_unwind(AssertUnwindSafe(|| work().into_iter().collect::<Vec<_>>()))
        .map_err(|payload| from_panic(kind::CATCH_ASYNC, payload))?;
    Ok(AllSettled::new(units).await)
}

/// Classifies a panic payload.
pub(crate) fn from_panic(boundary: &'static str, payload: Box<dyn Any + Send + 'static>) -> StructuredError {
    let payload = match payload.downcast::<StructuredError>() {
        Ok(structured) => {
            debug_event!(kind = %structured.kind(), "captured structured panic payload");
            return *structured;
        },
        Err(payload) => payload,
    };

    let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        debug_event!(boundary, "captured panic with an opaque payload");
        return StructuredError::new(kind::UNREACHABLE, "panic payload was not a message");
    };

    debug_event!(boundary, panic = %message, "captured panic");
    StructuredError::new(boundary, message)
}

fn from_error<E>(boundary: &'static str, error: E) -> StructuredError
where
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    let error = StructuredError::capture(boundary, error.into());
    debug_event!(boundary, error = %error, "captured error");
    error
}
