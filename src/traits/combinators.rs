//! Per-operation traits that let one combinator name serve both outcome types.
//!
//! `Result` hands its error to the failure handler; `Option` has nothing to
//! hand over, so its handler takes no argument. The handler shape is fixed by
//! the outcome's static type, never by inspecting the handler.

/// Unwrapping with a lazily computed fallback.
///
/// # Examples
///
/// ```
/// use outcome_rail::OrElse;
///
/// let failed: Result<usize, String> = Err("oops".into());
/// assert_eq!(failed.value_or_else(|e: String| e.len()), 4);
///
/// let missing: Option<usize> = None;
/// assert_eq!(missing.value_or_else(|| 7), 7);
/// ```
pub trait OrElse<F> {
    /// The payload of the success/presence arm.
    type Value;

    /// Returns the payload, or the value computed by `fallback` on failure.
    fn value_or_else(self, fallback: F) -> Self::Value;
}

impl<T, E, F> OrElse<F> for Result<T, E>
where
    F: FnOnce(E) -> T,
{
    type Value = T;

    #[inline]
    fn value_or_else(self, fallback: F) -> T {
        match self {
            Ok(value) => value,
            Err(error) => fallback(error),
        }
    }
}

impl<T, F> OrElse<F> for Option<T>
where
    F: FnOnce() -> T,
{
    type Value = T;

    #[inline]
    fn value_or_else(self, fallback: F) -> T {
        match self {
            Some(value) => value,
            None => fallback(),
        }
    }
}

/// Two-armed dispatch where exactly one handler runs.
///
/// # Examples
///
/// ```
/// use outcome_rail::Dispatch;
///
/// let parsed: Result<i32, String> = "12".parse::<i32>().map_err(|e| e.to_string());
/// let text = parsed.dispatch(|n| format!("got {}", n), |e: String| format!("failed: {}", e));
/// assert_eq!(text, "got 12");
///
/// let missing: Option<i32> = None;
/// assert_eq!(missing.dispatch(|n| n, || -1), -1);
/// ```
pub trait Dispatch<S, F> {
    /// The common return type of both handlers.
    type Output;

    /// Runs `on_success` with the payload, or `on_failure` otherwise.
    fn dispatch(self, on_success: S, on_failure: F) -> Self::Output;
}

impl<T, E, R, S, F> Dispatch<S, F> for Result<T, E>
where
    S: FnOnce(T) -> R,
    F: FnOnce(E) -> R,
{
    type Output = R;

    #[inline]
    fn dispatch(self, on_success: S, on_failure: F) -> R {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }
}

impl<T, R, S, F> Dispatch<S, F> for Option<T>
where
    S: FnOnce(T) -> R,
    F: FnOnce() -> R,
{
    type Output = R;

    #[inline]
    fn dispatch(self, on_success: S, on_failure: F) -> R {
        match self {
            Some(value) => on_success(value),
            None => on_failure(),
        }
    }
}
