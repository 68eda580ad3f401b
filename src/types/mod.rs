//! Value types shared by dictionaries, chains and cursors.
//!
//! # Examples
//!
//! ```
//! use snug_error::{NamedError, Position};
//!
//! let err = NamedError::coded("E001", "ERRO 1");
//! assert_eq!(err.code(), Some("E001"));
//! assert_eq!(Position::from("required").to_string(), "required");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod history;
pub mod message;
pub mod named_error;
pub mod position;

pub use history::*;
pub use message::*;
pub use named_error::*;
pub use position::*;

/// SmallVec-backed collection used for message bindings and failure history.
///
/// Uses inline storage for 1 element, which covers the common single-message
/// binding and the single-failure history without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Outcome of dispatching one check.
pub type CheckResult = Result<(), NamedError>;
