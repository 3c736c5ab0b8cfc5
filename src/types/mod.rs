//! Outcome and error types.
//!
//! This module provides the data side of the crate: the [`Tag`] discriminant
//! shared by `Result` and `Option`, the [`StructuredError`] failure payload and
//! the eager [`Pipeline`] builder.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{StructuredError, StructuredResult};
//!
//! fn lookup(id: u32) -> StructuredResult<&'static str> {
//!     match id {
//!         1 => Ok("admin"),
//!         _ => Err(StructuredError::new("not_found", "no such user").with_data("id", id)),
//!     }
//! }
//!
//! assert_eq!(lookup(1), Ok("admin"));
//! assert_eq!(lookup(2).unwrap_err().kind(), "not_found");
//! ```

pub mod pipeline;
pub mod structured_error;
pub mod tag;

pub use pipeline::Pipeline;
pub use structured_error::{kind, Cause, StructuredError};
pub use tag::Tag;

/// Result alias whose failure arm is a [`StructuredError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type StructuredResult<T> = Result<T, StructuredError>;
