//! Structured error type carrying an open kind taxonomy.
//!
//! This module provides [`StructuredError`], the canonical failure payload of
//! the crate. Each error carries:
//! - A free-form kind tag (`"validation"`, `"not_found"`, ...) instead of a closed enum
//! - A human-readable message, which may itself be a JSON document
//! - Optional structured fallback data merged into the serialized record
//! - An optional cause, exposed through [`std::error::Error::source`]

use std::any::type_name;
use std::borrow::Cow;
use std::error::Error;
use std::sync::Arc;

use serde_json::{Map, Value};

mod record;
mod traits;

/// Kind tags reserved by this crate.
pub mod kind {
    /// A panic or error captured by a synchronous boundary.
    pub const CATCH_SYNC: &str = "catchSync";
    /// A panic or error captured by an asynchronous boundary.
    pub const CATCH_ASYNC: &str = "catchAsync";
    /// A panic whose payload was neither a message nor a structured error.
    pub const UNREACHABLE: &str = "unreachable";
    /// A type-erased foreign error whose concrete type is unknown.
    pub const NATIVE: &str = "Error";
}

/// Shared, type-erased cause of a [`StructuredError`].
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Error value with an open kind tag, a message, optional fallback data and an optional cause.
///
/// Builder methods consume and return `self`; an error is never mutated once
/// it has been handed to an outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::StructuredError;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// let err = StructuredError::new("config", "failed to load configuration")
///     .with_data("path", "config.toml")
///     .with_cause(io);
///
/// assert_eq!(err.kind(), "config");
/// assert!(err.is_kind("config"));
/// assert_eq!(err.fallback().unwrap()["path"], "config.toml");
/// assert!(err.cause().is_some());
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct StructuredError {
    pub(crate) kind: Cow<'static, str>,
    pub(crate) message: String,
    pub(crate) fallback: Option<Map<String, Value>>,
    pub(crate) cause: Option<Cause>,
}

impl StructuredError {
    /// Creates an error with a kind and a message, without fallback data or cause.
    #[inline]
    pub fn new<K, M>(kind: K, message: M) -> Self
    where
        K: Into<Cow<'static, str>>,
        M: Into<String>,
    {
        Self { kind: kind.into(), message: message.into(), fallback: None, cause: None }
    }

    /// Attaches a fallback data map, replacing any previous one.
    #[inline]
    pub fn with_fallback(mut self, fallback: Map<String, Value>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Inserts a single entry into the fallback data map.
    #[inline]
    pub fn with_data<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fallback
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Links the error that caused this one.
    #[inline]
    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_shared_cause(Arc::new(cause))
    }

    /// Links an already shared cause.
    #[inline]
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Returns the kind tag.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the raw message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the attached fallback data, if any.
    #[inline]
    pub fn fallback(&self) -> Option<&Map<String, Value>> {
        self.fallback.as_ref()
    }

    /// Returns the linked cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns `true` if the kind tag equals `kind`.
    #[inline]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Converts a native error into a structured one.
    ///
    /// The kind is the error's own type name (`ParseIntError`, `Error`, ...),
    /// the message is its `Display` output and the error itself becomes the
    /// cause, so its `source()` chain stays reachable. A `StructuredError`
    /// passed in is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::StructuredError;
    ///
    /// let native = "x".parse::<i32>().unwrap_err();
    /// let err = StructuredError::from_error(native);
    /// assert_eq!(err.kind(), "ParseIntError");
    /// assert_eq!(err.message(), "invalid digit found in string");
    ///
    /// let original = StructuredError::new("auth", "expired token");
    /// assert_eq!(StructuredError::from_error(original.clone()), original);
    /// ```
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::capture(short_type_name::<E>(), Box::new(error))
    }

    /// Converts a type-erased error into a structured one.
    ///
    /// Boxed `StructuredError`s are unboxed unchanged; any other error gets the
    /// [`kind::NATIVE`] kind.
    #[inline]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::capture(kind::NATIVE, error)
    }

    /// Wraps `error` as the cause of a new error of the given kind, unless it
    /// is already structured.
    pub(crate) fn capture(kind: &'static str, error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        match error.downcast::<Self>() {
            Ok(structured) => *structured,
            Err(native) => Self::new(kind, native.to_string()).with_shared_cause(Arc::from(native)),
        }
    }

    /// Returns `true` only if `error` is a `StructuredError`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::StructuredError;
    ///
    /// let structured = StructuredError::new("io", "disk full");
    /// let native = std::fmt::Error;
    ///
    /// assert!(StructuredError::is(&structured));
    /// assert!(!StructuredError::is(&native));
    /// ```
    #[inline]
    pub fn is(error: &(dyn Error + 'static)) -> bool {
        error.is::<Self>()
    }

    /// Normalizes an optional error into an optional structured error.
    ///
    /// `None` stays `None`; anything else goes through [`StructuredError::from_error`].
    #[inline]
    pub fn has<E>(error: Option<E>) -> Option<Self>
    where
        E: Error + Send + Sync + 'static,
    {
        error.map(Self::from_error)
    }

    /// Normalizes an optional type-erased error through [`StructuredError::from_boxed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error;
    ///
    /// use outcome_rail::StructuredError;
    ///
    /// let boxed: Option<Box<dyn Error + Send + Sync>> = Some("socket closed".into());
    /// let err = StructuredError::has_boxed(boxed).unwrap();
    ///
    /// assert_eq!(err.kind(), "Error");
    /// assert_eq!(err.message(), "socket closed");
    /// assert!(StructuredError::has_boxed(None).is_none());
    /// ```
    #[inline]
    pub fn has_boxed(error: Option<Box<dyn Error + Send + Sync + 'static>>) -> Option<Self> {
        error.map(Self::from_boxed)
    }

    /// Runs `handler` only when the kind tag equals `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::StructuredError;
    ///
    /// let err = StructuredError::new("timeout", "upstream took too long");
    ///
    /// assert_eq!(err.when_kind("timeout", |_| 504), Some(504));
    /// assert_eq!(err.when_kind("auth", |_| 401), None);
    /// ```
    #[inline]
    pub fn when_kind<R, F>(&self, kind: &str, handler: F) -> Option<R>
    where
        F: FnOnce(&Self) -> R,
    {
        self.is_kind(kind).then(|| handler(self))
    }

    /// Dispatches on the kind tag: `on_match` when it equals `kind`, `on_other` otherwise.
    #[inline]
    pub fn match_kind<R, M, O>(self, kind: &str, on_match: M, on_other: O) -> R
    where
        M: FnOnce(Self) -> R,
        O: FnOnce(Self) -> R,
    {
        if self.is_kind(kind) {
            on_match(self)
        } else {
            on_other(self)
        }
    }

    /// Dispatches a type-erased error on whether it is structured or native.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::StructuredError;
    ///
    /// let boxed: Box<dyn std::error::Error + Send + Sync> = "plain".into();
    /// let label = StructuredError::dispatch(boxed, |e| e.kind().to_owned(), |e| e.to_string());
    /// assert_eq!(label, "plain");
    /// ```
    pub fn dispatch<R, S, N>(
        error: Box<dyn Error + Send + Sync + 'static>,
        on_structured: S,
        on_native: N,
    ) -> R
    where
        S: FnOnce(Self) -> R,
        N: FnOnce(Box<dyn Error + Send + Sync + 'static>) -> R,
    {
        match error.downcast::<Self>() {
            Ok(structured) => on_structured(*structured),
            Err(native) => on_native(native),
        }
    }
}

/// Last path segment of a type name, without generic arguments.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
