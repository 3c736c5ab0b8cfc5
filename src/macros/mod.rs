//! Ergonomic macros for building [`StructuredError`](crate::StructuredError) values.
//!
//! - [`macro@crate::structured`] - Builds a structured error with a formatted message.
//! - [`macro@crate::fail`] - Returns early with `Err(structured!(..).into())`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{fail, structured, StructuredResult};
//!
//! fn parse_port(raw: &str) -> StructuredResult<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(0) => fail!("config", "port must be non-zero"),
//!         Ok(port) => Ok(port),
//!         Err(_) => Err(structured!("config", "invalid port: {}", raw)),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080"), Ok(8080));
//! assert_eq!(parse_port("0").unwrap_err().kind(), "config");
//! assert_eq!(parse_port("x").unwrap_err().message(), "invalid port: x");
//! ```

/// Creates a [`StructuredError`](crate::StructuredError) from a kind and a
/// `format!`-style message.
///
/// # Examples
///
/// ```
/// use outcome_rail::structured;
///
/// let user_id = 7;
/// let err = structured!("not_found", "user {} does not exist", user_id);
///
/// assert_eq!(err.kind(), "not_found");
/// assert_eq!(err.message(), "user 7 does not exist");
/// ```
#[macro_export]
macro_rules! structured {
    ($kind:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::StructuredError::new($kind, ::std::format!($fmt $(, $arg)*))
    };
}

/// Returns early from the enclosing function with a structured error.
///
/// Expands to `return Err(structured!(..).into())`, so the enclosing
/// function's error type only needs `From<StructuredError>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, StructuredResult};
///
/// fn check(limit: u32) -> StructuredResult<u32> {
///     if limit > 100 {
///         fail!("validation", "limit {} exceeds 100", limit);
///     }
///     Ok(limit)
/// }
///
/// assert!(check(101).is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        return ::core::result::Result::Err($crate::structured!($kind, $fmt $(, $arg)*).into())
    };
}

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)+);
        }
    };
}

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)+);
        }
    };
}
