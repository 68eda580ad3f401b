//! Error-code dictionaries.
//!
//! An [`ErrorDictionary`] maps a code such as `"E001"` to a function that
//! renders the failure message from the arguments a check passes to
//! [`CheckContext::throw`](crate::CheckContext::throw). Codes that are not in
//! the dictionary are treated as literal messages.
//!
//! # Examples
//!
//! ```
//! use snug_error::ErrorDictionary;
//!
//! let dictionary = ErrorDictionary::<i64>::new()
//!     .entry("E001", |_| "ERRO 1".to_string())
//!     .entry("E002", |args| format!("ERRO: {}", args[0]));
//!
//! let err = dictionary.raise("E002", &[4]);
//! assert_eq!(err.code(), Some("E002"));
//! assert_eq!(err.message(), "ERRO: 4");
//!
//! let err = dictionary.raise("name is required", &[]);
//! assert_eq!(err.code(), None);
//! assert_eq!(err.message(), "name is required");
//! ```
use crate::types::alloc_type::{Arc, BTreeMap, String};
use crate::types::NamedError;
use core::fmt::{Debug, Formatter};

/// Renders a failure message from the arguments passed to `throw`.
pub type MessageFn<A> = Arc<dyn Fn(&[A]) -> String + Send + Sync>;

/// Immutable mapping from error code to message-producing function.
pub struct ErrorDictionary<A> {
    entries: BTreeMap<String, MessageFn<A>>,
}

impl<A> ErrorDictionary<A> {
    /// Creates an empty dictionary.
    #[inline]
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Adds (or replaces) the entry for `code`, builder style.
    #[must_use]
    pub fn entry<F>(mut self, code: impl Into<String>, message: F) -> Self
    where
        F: Fn(&[A]) -> String + Send + Sync + 'static,
    {
        self.entries.insert(code.into(), Arc::new(message));
        self
    }

    /// Returns true if `code` has an entry.
    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Renders the message registered for `code`, if there is one.
    #[inline]
    pub fn resolve(&self, code: &str, args: &[A]) -> Option<String> {
        self.entries.get(code).map(|message| message(args))
    }

    /// Builds the failure `throw(code, args)` raises against this dictionary.
    ///
    /// A known code yields a [`Coded`](crate::ErrorKind::Coded) failure named
    /// after the code; anything else becomes a nameless ad-hoc failure whose
    /// message is `code` itself.
    pub fn raise(&self, code: &str, args: &[A]) -> NamedError {
        match self.resolve(code, args) {
            Some(message) => NamedError::coded(code, message),
            None => NamedError::ad_hoc(code),
        }
    }

    /// Layers `overrides` on top of `self`; entries in `overrides` win on collision.
    #[must_use]
    pub fn merged(&self, overrides: &Self) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(overrides.entries.iter().map(|(code, f)| (code.clone(), Arc::clone(f))));
        Self { entries }
    }

    /// Effective dictionary for a checker built from an optional factory
    /// default and an optional call-site dictionary.
    pub(crate) fn effective(defaults: Option<&Self>, call_site: Option<Self>) -> Option<Self> {
        match (defaults, call_site) {
            (None, None) => None,
            (Some(defaults), None) => Some(defaults.clone()),
            (None, Some(call_site)) => Some(call_site),
            (Some(defaults), Some(call_site)) => Some(defaults.merged(&call_site)),
        }
    }
}

/// `throw` without any dictionary: the code is the literal message.
pub(crate) fn raise_with<A>(
    dictionary: Option<&ErrorDictionary<A>>,
    code: &str,
    args: &[A],
) -> NamedError {
    match dictionary {
        Some(dictionary) => dictionary.raise(code, args),
        None => NamedError::ad_hoc(code),
    }
}

impl<A> Clone for ErrorDictionary<A> {
    fn clone(&self) -> Self {
        Self { entries: self.entries.clone() }
    }
}

impl<A> Default for ErrorDictionary<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Debug for ErrorDictionary<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.codes()).finish()
    }
}

impl<A, K, F> FromIterator<(K, F)> for ErrorDictionary<A>
where
    K: Into<String>,
    F: Fn(&[A]) -> String + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, F)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |dictionary, (code, message)| dictionary.entry(code, message))
    }
}
