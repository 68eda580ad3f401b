use crate::types::alloc_type::String;
use core::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name reported for failures that carry no symbolic code.
pub const DEFAULT_ERROR_NAME: &str = "Error";

/// Name reported when an auto-advancing cursor runs past the end of its chain.
pub const EXHAUSTED_ERROR_NAME: &str = "ExhaustedError";

/// How a [`NamedError`] came to be.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Resolved through an [`ErrorDictionary`](crate::ErrorDictionary) entry.
    Coded,
    /// Literal message, optionally with a name chosen by the check itself.
    AdHoc,
    /// An auto-advancing cursor was asked for a check past the end of the chain.
    Exhausted,
}

/// A failure raised by a check: an optional symbolic name plus a message.
///
/// Every failure raised while a cursor dispatches a check is appended to the
/// cursor family's history before it is handed back to the caller.
///
/// # Examples
///
/// ```
/// use snug_error::{ErrorKind, NamedError};
///
/// let err = NamedError::ad_hoc("name is required");
/// assert_eq!(err.name(), "Error");
/// assert_eq!(err.code(), None);
/// assert_eq!(err.to_string(), "Error: name is required");
///
/// let err = NamedError::new("E010", "too short");
/// assert_eq!(err.name(), "E010");
/// assert_eq!(err.kind(), ErrorKind::AdHoc);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedError {
    pub(crate) name: Option<String>,
    pub(crate) message: String,
    pub(crate) kind: ErrorKind,
}

impl NamedError {
    /// Builds a failure with an explicit name, as a check raising its own error would.
    #[inline]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: Some(name.into()), message: message.into(), kind: ErrorKind::AdHoc }
    }

    /// Builds a nameless failure carrying only a literal message.
    #[inline]
    pub fn ad_hoc(message: impl Into<String>) -> Self {
        Self { name: None, message: message.into(), kind: ErrorKind::AdHoc }
    }

    /// Builds a failure whose name is a dictionary code.
    #[inline]
    pub fn coded(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: Some(code.into()), message: message.into(), kind: ErrorKind::Coded }
    }

    pub(crate) fn exhausted(position: usize, len: usize) -> Self {
        Self {
            name: Some(EXHAUSTED_ERROR_NAME.into()),
            message: alloc::format!(
                "no more checks: position {} is past the end of a chain of {}",
                position,
                len
            ),
            kind: ErrorKind::Exhausted,
        }
    }

    /// The failure's name, or [`DEFAULT_ERROR_NAME`] when it has none.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_ERROR_NAME)
    }

    /// The dictionary code this failure was resolved from, if any.
    #[inline]
    pub fn code(&self) -> Option<&str> {
        match self.kind {
            ErrorKind::Coded => self.name.as_deref(),
            _ => None,
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.kind == ErrorKind::Exhausted
    }
}

impl Display for NamedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.name(), self.message)
    }
}

impl core::error::Error for NamedError {}

impl From<&str> for NamedError {
    #[inline]
    fn from(message: &str) -> Self {
        Self::ad_hoc(message)
    }
}

impl From<String> for NamedError {
    #[inline]
    fn from(message: String) -> Self {
        Self::ad_hoc(message)
    }
}
