//! Free-function combinators over `Result` and `Option`.
//!
//! Each function works on both outcome types. Where the failure handler differs
//! (an error for `Result`, nothing for `Option`), the overload is picked by the
//! outcome's static type through the [`OrElse`] and [`Dispatch`] traits.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::combinators::{match_with, unwrap_or, unwrap_or_else};
//! use outcome_rail::StructuredError;
//!
//! let failed: Result<u32, StructuredError> = Err(StructuredError::new("timeout", "slow"));
//!
//! assert_eq!(unwrap_or(failed.clone(), 0), 0);
//! assert_eq!(unwrap_or_else(None, || 5), 5);
//!
//! let status = match_with(failed, |_| 200, |e: StructuredError| {
//!     e.when_kind("timeout", |_| 504).unwrap_or(500)
//! });
//! assert_eq!(status, 504);
//! ```

use crate::traits::{Dispatch, OrElse, Outcome};

/// Returns `true` if the result is `Ok`.
#[inline]
pub fn is_ok<T, E>(result: &Result<T, E>) -> bool {
    result.is_ok()
}

/// Returns `true` if the result is `Err`.
#[inline]
pub fn is_err<T, E>(result: &Result<T, E>) -> bool {
    result.is_err()
}

/// Returns `true` if the option is `Some`.
#[inline]
pub fn is_some<T>(option: &Option<T>) -> bool {
    option.is_some()
}

/// Returns `true` if the option is `None`.
#[inline]
pub fn is_none<T>(option: &Option<T>) -> bool {
    option.is_none()
}

/// Returns the success/presence payload.
///
/// This is the only partial combinator. Use it where presence was already
/// established or where failure is genuinely unrecoverable.
///
/// # Panics
///
/// Panics on `Err` and `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::combinators::unwrap;
///
/// assert_eq!(unwrap(Ok::<_, ()>(3)), 3);
/// assert_eq!(unwrap(Some("x")), "x");
/// ```
///
/// ```should_panic
/// use outcome_rail::combinators::unwrap;
///
/// unwrap(None::<u8>);
/// ```
#[inline]
#[track_caller]
pub fn unwrap<O: Outcome>(outcome: O) -> O::Value {
    outcome.unwrap_success()
}

/// Returns the payload, or `fallback` on failure.
#[inline]
pub fn unwrap_or<O: Outcome>(outcome: O, fallback: O::Value) -> O::Value {
    outcome.success().unwrap_or(fallback)
}

/// Returns the payload, or the value computed by `fallback` on failure.
///
/// `fallback` receives the error for `Result` and no argument for `Option`.
///
/// # Examples
///
/// ```
/// use outcome_rail::combinators::unwrap_or_else;
///
/// let failed: Result<usize, &str> = Err("four");
/// assert_eq!(unwrap_or_else(failed, |e: &str| e.len()), 4);
/// assert_eq!(unwrap_or_else(Some(1), || 9), 1);
/// ```
#[inline]
pub fn unwrap_or_else<O, F>(outcome: O, fallback: F) -> O::Value
where
    O: OrElse<F>,
{
    outcome.value_or_else(fallback)
}

/// Runs exactly one of two handlers depending on the discriminant.
///
/// `on_success` receives the payload; `on_failure` receives the error for
/// `Result` and no argument for `Option`.
///
/// # Examples
///
/// ```
/// use outcome_rail::combinators::match_with;
///
/// let greeting = match_with(Some("ada"), |name| format!("hi {}", name), || "hi".to_owned());
/// assert_eq!(greeting, "hi ada");
/// ```
#[inline]
pub fn match_with<O, S, F>(outcome: O, on_success: S, on_failure: F) -> O::Output
where
    O: Dispatch<S, F>,
{
    outcome.dispatch(on_success, on_failure)
}
