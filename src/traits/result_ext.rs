//! Extension traits for lifting native results and options into structured outcomes.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{StructuredOptionExt, StructuredResultExt};
//!
//! let port = "80a".parse::<u16>().structured();
//! assert_eq!(port.unwrap_err().kind(), "ParseIntError");
//!
//! let host = None::<&str>.ok_or_structured("config", "missing host");
//! assert_eq!(host.unwrap_err().message(), "missing host");
//! ```

use std::borrow::Cow;
use std::error::Error;

use crate::types::StructuredError;

/// Extension trait converting the error arm of a `Result` into a [`StructuredError`].
pub trait StructuredResultExt<T, E> {
    /// Converts the error with [`StructuredError::from_error`], keeping its type name as kind.
    fn structured(self) -> Result<T, StructuredError>;

    /// Wraps the error as the cause of a new error of the given kind.
    ///
    /// The message is copied from the wrapped error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::StructuredResultExt;
    ///
    /// let err = std::fs::read_to_string("/definitely/missing").classify("config").unwrap_err();
    /// assert_eq!(err.kind(), "config");
    /// assert!(err.cause().is_some());
    /// ```
    fn classify<K>(self, kind: K) -> Result<T, StructuredError>
    where
        K: Into<Cow<'static, str>>;
}

impl<T, E> StructuredResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn structured(self) -> Result<T, StructuredError> {
        self.map_err(StructuredError::from_error)
    }

    #[inline]
    fn classify<K>(self, kind: K) -> Result<T, StructuredError>
    where
        K: Into<Cow<'static, str>>,
    {
        self.map_err(|error| StructuredError::new(kind, error.to_string()).with_cause(error))
    }
}

/// Extension trait turning an absent `Option` into a structured failure.
pub trait StructuredOptionExt<T> {
    /// Maps `None` to a [`StructuredError`] built from `kind` and `message`.
    fn ok_or_structured<K, M>(self, kind: K, message: M) -> Result<T, StructuredError>
    where
        K: Into<Cow<'static, str>>,
        M: Into<String>;
}

impl<T> StructuredOptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_structured<K, M>(self, kind: K, message: M) -> Result<T, StructuredError>
    where
        K: Into<Cow<'static, str>>,
        M: Into<String>,
    {
        self.ok_or_else(|| StructuredError::new(kind, message))
    }
}
