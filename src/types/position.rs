use crate::types::alloc_type::String;
use crate::types::NamedError;
use core::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a pinned cursor points: a chain index or the name of a check.
///
/// Names are resolved against the chain lazily, when
/// [`Cursor::error`](crate::Cursor::error) is called.
///
/// # Examples
///
/// ```
/// use snug_error::Position;
///
/// assert_eq!(Position::from(2), Position::Index(2));
/// assert_eq!(Position::from("has_email"), Position::Name("has_email".into()));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    Index(usize),
    Name(String),
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Position {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Position {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl From<String> for Position {
    #[inline]
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&Position> for Position {
    #[inline]
    fn from(position: &Position) -> Self {
        position.clone()
    }
}

/// A position token that names no check in the chain.
///
/// This is a usage error rather than a check failure: it is returned before
/// anything is dispatched and is never appended to a cursor's history.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidPosition {
    pub(crate) token: Position,
}

impl InvalidPosition {
    #[inline]
    pub fn new(token: Position) -> Self {
        Self { token }
    }

    /// The token that failed to resolve.
    #[inline]
    pub fn token(&self) -> &Position {
        &self.token
    }
}

impl Display for InvalidPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid position: {}", self.token)
    }
}

impl core::error::Error for InvalidPosition {}

// Lets a check propagate a bad jump with `?`; the cursor then records it.
impl From<InvalidPosition> for NamedError {
    fn from(error: InvalidPosition) -> Self {
        NamedError::ad_hoc(alloc::format!("{}", error))
    }
}
