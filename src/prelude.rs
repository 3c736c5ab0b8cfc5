//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`structured!`], [`fail!`]
//! - **Types**: [`StructuredError`], [`StructuredResult`], [`Pipeline`], [`Tag`]
//! - **Traits**: [`Outcome`], [`OrElse`], [`Dispatch`], [`StructuredResultExt`], [`StructuredOptionExt`]
//! - **Boundaries**: [`catch_sync`], [`try_sync`] (and the async variants with the `async` feature)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn load(raw: &str) -> StructuredResult<u16> {
//!     let port = raw.parse::<u16>().classify("config")?;
//!     if port < 1024 {
//!         fail!("config", "port {} is privileged", port);
//!     }
//!     Ok(port)
//! }
//!
//! assert_eq!(load("8080"), Ok(8080));
//! assert_eq!(load("80").unwrap_err().message(), "port 80 is privileged");
//! assert_eq!(load("x").unwrap_err().kind(), "config");
//! ```

// Macros
pub use crate::{fail, structured};

// Core types
pub use crate::types::{Pipeline, StructuredError, StructuredResult, Tag};

// Traits
pub use crate::traits::{Dispatch, OrElse, Outcome, StructuredOptionExt, StructuredResultExt};

// Boundaries
pub use crate::boundary::{catch_sync, try_sync};
#[cfg(feature = "async")]
pub use crate::boundary::{catch_async, catch_async_all, try_async};
