//! Tagged outcomes, structured errors and panic-safe capture boundaries.
//!
//! `Result` and `Option` are the two outcome types. This crate adds a uniform
//! combinator vocabulary over both, a [`StructuredError`] with an open kind
//! taxonomy and a canonical JSON record, boundaries that turn panics and
//! foreign errors into values, and an eager [`Pipeline`] builder.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Structured Error Record
//!
//! ```
//! use outcome_rail::StructuredError;
//! use serde_json::json;
//!
//! let err = StructuredError::new("validation", r#"{"field":"email"}"#)
//!     .with_data("code", 422);
//!
//! assert_eq!(
//!     serde_json::to_value(&err).unwrap(),
//!     json!({
//!         "type": "validation",
//!         "message": { "field": "email", "code": 422 },
//!         "fallback": { "code": 422 },
//!         "option": {}
//!     })
//! );
//! ```
//!
//! ## Capturing Panics
//!
//! ```
//! use outcome_rail::{catch_sync, match_with, StructuredError};
//!
//! let outcome = catch_sync(|| -> u32 { panic!("boom") });
//! let text = match_with(outcome, |n: u32| n.to_string(), |e: StructuredError| e.to_string());
//!
//! assert_eq!(text, "catchSync: boom");
//! ```
//!
//! ## Pipeline
//!
//! ```
//! use outcome_rail::Pipeline;
//!
//! let total = Pipeline::start(2).then(|x| x + 1).then(|x| x * 10);
//! assert_eq!(*total.get(), 30);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

/// Capture boundaries for panics and foreign errors
pub mod boundary;
/// Free-function combinators over `Result` and `Option`
pub mod combinators;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits shared by both outcome types
pub mod traits;
/// StructuredError, Tag and Pipeline
pub mod types;

pub use boundary::{catch_sync, try_sync};
#[cfg(feature = "async")]
pub use boundary::{catch_async, catch_async_all, try_async};
pub use combinators::{is_err, is_none, is_ok, is_some, match_with, unwrap, unwrap_or, unwrap_or_else};
pub use traits::{Dispatch, OrElse, Outcome, StructuredOptionExt, StructuredResultExt};
pub use types::{kind, Cause, Pipeline, StructuredError, StructuredResult, Tag};
