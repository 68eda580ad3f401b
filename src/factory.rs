//! Checker factories and configuration.
//!
//! [`checker`] and [`checker_with`] are the plain entry points. A
//! [`CheckerFactory`] built with [`CheckerFactory::create`] carries a default
//! dictionary and an `on_error` observer into every checker it builds; a
//! call-site dictionary is layered on top of the default, with call-site
//! entries winning on collision.
//!
//! # Examples
//!
//! ```
//! use snug_error::{Check, CheckerConfig, CheckerFactory, ErrorDictionary};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let seen = Arc::new(AtomicUsize::new(0));
//! let observed = Arc::clone(&seen);
//!
//! let factory = CheckerFactory::create(
//!     CheckerConfig::new()
//!         .dictionary(ErrorDictionary::new().entry("E001", |_: &[u8]| "ERRO 1".to_string()))
//!         .on_error(move |_| {
//!             observed.fetch_add(1, Ordering::SeqCst);
//!         }),
//! );
//!
//! let checker = factory.checker(vec![Check::new(|ctx, _: &[u8]| ctx.throw("E001", &[]))]);
//! let cursor = checker.call([]);
//!
//! assert_eq!(cursor.next(&[]).unwrap_err().message(), "ERRO 1");
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```
use crate::chain::{Check, CheckChain};
use crate::cursor::Cursor;
use crate::dictionary::ErrorDictionary;
use crate::types::alloc_type::Arc;
use crate::types::NamedError;
use core::fmt::{Debug, Formatter};

/// Observer invoked with every failure at the moment it is recorded.
///
/// It cannot suppress or replace the failure. A panic inside it is not
/// caught and unwinds through the cursor call that recorded the failure.
pub type OnError = Arc<dyn Fn(&NamedError) + Send + Sync>;

/// Defaults carried by a [`CheckerFactory`].
pub struct CheckerConfig<A> {
    dictionary: Option<ErrorDictionary<A>>,
    on_error: Option<OnError>,
}

impl<A> CheckerConfig<A> {
    #[inline]
    pub fn new() -> Self {
        Self { dictionary: None, on_error: None }
    }

    /// Sets the default dictionary.
    #[must_use]
    pub fn dictionary(mut self, dictionary: ErrorDictionary<A>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Sets the failure observer.
    #[must_use]
    pub fn on_error<F>(mut self, on_error: F) -> Self
    where
        F: Fn(&NamedError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(on_error));
        self
    }
}

impl<A> Default for CheckerConfig<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Debug for CheckerConfig<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CheckerConfig")
            .field("dictionary", &self.dictionary)
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// Builds [`Checker`]s that share a default dictionary and observer.
pub struct CheckerFactory<A> {
    defaults: Option<ErrorDictionary<A>>,
    on_error: Option<OnError>,
}

impl<A> CheckerFactory<A> {
    /// A factory pre-seeded with `config`.
    pub fn create(config: CheckerConfig<A>) -> Self {
        Self { defaults: config.dictionary, on_error: config.on_error }
    }

    /// Builds a checker that uses the factory's default dictionary as-is.
    pub fn checker<I>(&self, checks: I) -> Checker<A>
    where
        I: IntoIterator<Item = Check<A>>,
    {
        self.build(None, checks)
    }

    /// Builds a checker whose dictionary is `dictionary` layered over the defaults.
    pub fn checker_with<I>(&self, dictionary: ErrorDictionary<A>, checks: I) -> Checker<A>
    where
        I: IntoIterator<Item = Check<A>>,
    {
        self.build(Some(dictionary), checks)
    }

    /// The default dictionary, if one was configured.
    #[inline]
    pub fn dictionary(&self) -> Option<&ErrorDictionary<A>> {
        self.defaults.as_ref()
    }

    fn build<I>(&self, call_site: Option<ErrorDictionary<A>>, checks: I) -> Checker<A>
    where
        I: IntoIterator<Item = Check<A>>,
    {
        let core = CheckerCore {
            chain: checks.into_iter().collect(),
            dictionary: ErrorDictionary::effective(self.defaults.as_ref(), call_site),
            on_error: self.on_error.clone(),
        };
        Checker { core: Arc::new(core) }
    }
}

impl<A> Default for CheckerFactory<A> {
    fn default() -> Self {
        Self::create(CheckerConfig::new())
    }
}

impl<A> Clone for CheckerFactory<A> {
    fn clone(&self) -> Self {
        Self { defaults: self.defaults.clone(), on_error: self.on_error.clone() }
    }
}

impl<A> Debug for CheckerFactory<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CheckerFactory")
            .field("defaults", &self.defaults)
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// Everything a checker closes over; fixed once built.
pub(crate) struct CheckerCore<A> {
    pub(crate) chain: CheckChain<A>,
    pub(crate) dictionary: Option<ErrorDictionary<A>>,
    pub(crate) on_error: Option<OnError>,
}

/// A configured check chain. Each [`call`](Self::call) starts a fresh cursor family.
pub struct Checker<A> {
    core: Arc<CheckerCore<A>>,
}

impl<A> Checker<A> {
    /// Starts a cursor family bound to `params`, with an empty history.
    pub fn call<I>(&self, params: I) -> Cursor<A>
    where
        I: IntoIterator<Item = A>,
    {
        Cursor::start(Arc::clone(&self.core), params.into_iter().collect())
    }

    #[inline]
    pub fn chain(&self) -> &CheckChain<A> {
        &self.core.chain
    }

    /// The effective dictionary after merging factory defaults and call-site entries.
    #[inline]
    pub fn dictionary(&self) -> Option<&ErrorDictionary<A>> {
        self.core.dictionary.as_ref()
    }
}

impl<A> Clone for Checker<A> {
    fn clone(&self) -> Self {
        Self { core: Arc::clone(&self.core) }
    }
}

impl<A> Debug for Checker<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Checker")
            .field("chain", &self.core.chain)
            .field("dictionary", &self.core.dictionary)
            .finish_non_exhaustive()
    }
}

/// Builds a checker with no dictionary: every `throw` code is a literal message.
///
/// # Examples
///
/// ```
/// use snug_error::{checker, Check};
///
/// let cursor = checker(vec![Check::new(|ctx, _: &[()]| ctx.throw("always", &[]))]).call([]);
/// let err = cursor.next(&[]).unwrap_err();
/// assert_eq!(err.name(), "Error");
/// assert_eq!(err.message(), "always");
/// ```
pub fn checker<A, I>(checks: I) -> Checker<A>
where
    I: IntoIterator<Item = Check<A>>,
{
    CheckerFactory::default().checker(checks)
}

/// Builds a checker that resolves `throw` codes through `dictionary`.
pub fn checker_with<A, I>(dictionary: ErrorDictionary<A>, checks: I) -> Checker<A>
where
    I: IntoIterator<Item = Check<A>>,
{
    CheckerFactory::default().checker_with(dictionary, checks)
}
