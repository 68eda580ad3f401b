use crate::types::{ErrorVec, NamedError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The append-only record of every failure raised within one cursor family.
///
/// [`Cursor::errors`](crate::Cursor::errors) hands out snapshots of this type;
/// the live history is only ever pushed to by the cursor that dispatched
/// the failing check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorHistory {
    items: ErrorVec<NamedError>,
}

impl ErrorHistory {
    /// Creates an empty history.
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    #[inline]
    pub(crate) fn push(&mut self, error: NamedError) {
        self.items.push(error);
    }

    /// Returns true if no failure has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of recorded failures.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&NamedError> {
        self.items.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&NamedError> {
        self.items.last()
    }

    /// Iterates failures in the order they were raised.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedError> {
        self.items.iter()
    }

    /// Names of the recorded failures, oldest first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(NamedError::name)
    }

    #[inline]
    pub fn as_slice(&self) -> &[NamedError] {
        &self.items
    }

    /// Consumes the history and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<NamedError> {
        self.items
    }
}

impl core::ops::Index<usize> for ErrorHistory {
    type Output = NamedError;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IntoIterator for ErrorHistory {
    type Item = NamedError;
    type IntoIter = smallvec::IntoIter<[NamedError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorHistory {
    type Item = &'a NamedError;
    type IntoIter = core::slice::Iter<'a, NamedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
