//! Replayable check cursors with coded error dictionaries.
//!
//! A [`Checker`] closes over an ordered [`CheckChain`] and an optional
//! [`ErrorDictionary`]. Each call to [`Checker::call`] starts a [`Cursor`]
//! family that runs checks one at a time, jumps to named checks, binds
//! contextual messages, and records every failure in a shared history.
//!
//! # Examples
//!
//! ## Stepping Through Checks
//!
//! ```
//! use snug_error::{check, checker_with, throw, CheckContext, CheckResult, ErrorDictionary};
//!
//! fn present(ctx: &CheckContext<'_, i64>, args: &[i64]) -> CheckResult {
//!     if args.is_empty() {
//!         throw!(ctx, "E001");
//!     }
//!     Ok(())
//! }
//!
//! fn equal(ctx: &CheckContext<'_, i64>, args: &[i64]) -> CheckResult {
//!     if args[0] != args[1] {
//!         throw!(ctx, "E002", args[0] + args[1]);
//!     }
//!     Ok(())
//! }
//!
//! let dictionary = ErrorDictionary::new()
//!     .entry("E001", |_: &[i64]| "ERRO 1".to_string())
//!     .entry("E002", |args: &[i64]| format!("ERRO: {}", args[0]));
//!
//! let cursor = checker_with(dictionary, vec![check!(present), check!(equal)]).call([]);
//!
//! assert!(cursor.next(&[7]).is_ok());
//! let err = cursor.next(&[1, 3]).unwrap_err();
//! assert_eq!(err.code(), Some("E002"));
//! assert_eq!(err.message(), "ERRO: 4");
//! assert_eq!(cursor.errors().len(), 1);
//! ```
//!
//! ## Layered Defaults
//!
//! ```
//! use snug_error::{check, CheckerConfig, CheckerFactory, ErrorDictionary};
//!
//! let factory = CheckerFactory::create(
//!     CheckerConfig::new()
//!         .dictionary(ErrorDictionary::new().entry("E001", |_: &[u8]| "default".to_string())),
//! );
//!
//! let local = ErrorDictionary::new().entry("E001", |_: &[u8]| "local".to_string());
//! let checker = factory.checker_with(local, vec![check!(|ctx, _: &[u8]| ctx.throw("E001", &[]))]);
//!
//! assert_eq!(checker.call([]).next(&[]).unwrap_err().message(), "local");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Ordered check chains and position resolution
pub mod chain;
/// Cursor families, derived views and the per-check context
pub mod cursor;
/// Error-code dictionaries and code resolution
pub mod dictionary;
/// Checker factories and configuration
pub mod factory;
/// Macros for declaring checks and raising failures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Named errors, positions, messages and failure history
pub mod types;

pub use chain::{Check, CheckChain, CheckFn};
pub use cursor::{CheckContext, Cursor, PinnedCursor, Repeat};
pub use dictionary::{ErrorDictionary, MessageFn};
pub use factory::{checker, checker_with, Checker, CheckerConfig, CheckerFactory, OnError};
pub use types::{
    CheckResult, ErrorHistory, ErrorKind, ErrorVec, InvalidPosition, Message, MessageBinding,
    NamedError, Position, DEFAULT_ERROR_NAME, EXHAUSTED_ERROR_NAME,
};
