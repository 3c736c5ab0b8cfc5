//! Core traits shared by both outcome types.
//!
//! - [`Outcome`]: discriminant access and unwrapping over `Result` and `Option`
//! - [`OrElse`]: fallback computation whose handler shape follows the outcome type
//! - [`Dispatch`]: two-armed dispatch where exactly one handler runs
//! - [`StructuredResultExt`] / [`StructuredOptionExt`]: lifting native outcomes
//!   into [`StructuredError`](crate::StructuredError) failures
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{Dispatch, Outcome};
//!
//! let found = Some("value");
//! assert!(found.is_success());
//! assert_eq!(found.dispatch(|v: &str| v.len(), || 0), 5);
//! ```

pub mod combinators;
pub mod outcome;
pub mod result_ext;

pub use combinators::{Dispatch, OrElse};
pub use outcome::Outcome;
pub use result_ext::{StructuredOptionExt, StructuredResultExt};
