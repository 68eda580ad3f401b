//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use snug_error::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`check!`], [`throw!`], [`ensure!`]
//! - **Entry points**: [`checker`], [`checker_with`], [`CheckerFactory`], [`CheckerConfig`]
//! - **Types**: [`Check`], [`CheckContext`], [`CheckResult`], [`Cursor`], [`ErrorDictionary`],
//!   [`NamedError`]
//!
//! # Examples
//!
//! ```
//! use snug_error::prelude::*;
//!
//! fn required(ctx: &CheckContext<'_, Option<u32>>, args: &[Option<u32>]) -> CheckResult {
//!     ensure!(ctx, matches!(args.first(), Some(Some(_))), "E001");
//!     Ok(())
//! }
//!
//! let dictionary = ErrorDictionary::new().entry("E001", |_: &[Option<u32>]| "ERRO 1".into());
//! let cursor = checker_with(dictionary, vec![check!(required)]).call([]);
//!
//! assert_eq!(cursor.next(&[None]).unwrap_err().name(), "E001");
//! assert_eq!(cursor.errors().len(), 1);
//! ```

// Macros
pub use crate::{check, ensure, throw};

// Entry points
pub use crate::factory::{checker, checker_with, Checker, CheckerConfig, CheckerFactory};

// Core types
pub use crate::chain::Check;
pub use crate::cursor::{CheckContext, Cursor};
pub use crate::dictionary::ErrorDictionary;
pub use crate::types::{CheckResult, NamedError};
