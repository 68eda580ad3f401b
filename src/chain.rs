//! Ordered check chains and position resolution.
//!
//! A [`CheckChain`] is fixed when a [`Checker`](crate::Checker) is built and
//! never changes afterwards. Each [`Check`] may carry a name so a cursor can
//! jump straight to it with [`Cursor::error`](crate::Cursor::error).
//!
//! # Examples
//!
//! ```
//! use snug_error::{Check, CheckChain, Position};
//!
//! let chain: CheckChain<i64> = CheckChain::new(vec![
//!     Check::new(|_, _| Ok(())),
//!     Check::named("positive", |ctx, args: &[i64]| {
//!         if args[0] <= 0 {
//!             return ctx.throw("must be positive", &[]);
//!         }
//!         Ok(())
//!     }),
//! ]);
//!
//! assert_eq!(chain.resolve(&Position::from("positive")), Ok(1));
//! assert!(chain.resolve(&Position::from("missing")).is_err());
//! ```
use crate::cursor::CheckContext;
use crate::types::alloc_type::{Arc, String, Vec};
use crate::types::{CheckResult, InvalidPosition, Position};
use core::fmt::{Debug, Formatter};

/// A single check: receives its dispatch context and the `next` call arguments.
pub type CheckFn<A> = Arc<dyn Fn(&CheckContext<'_, A>, &[A]) -> CheckResult + Send + Sync>;

/// One entry of a [`CheckChain`].
pub struct Check<A> {
    name: Option<String>,
    run: CheckFn<A>,
}

impl<A> Check<A> {
    /// Wraps an unnamed check.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&CheckContext<'_, A>, &[A]) -> CheckResult + Send + Sync + 'static,
    {
        Self { name: None, run: Arc::new(check) }
    }

    /// Wraps a check that can be targeted by name.
    pub fn named<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&CheckContext<'_, A>, &[A]) -> CheckResult + Send + Sync + 'static,
    {
        Self { name: Some(name.into()), run: Arc::new(check) }
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub(crate) fn run(&self, ctx: &CheckContext<'_, A>, args: &[A]) -> CheckResult {
        (self.run)(ctx, args)
    }
}

impl<A> Clone for Check<A> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), run: Arc::clone(&self.run) }
    }
}

impl<A> Debug for Check<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish_non_exhaustive()
    }
}

/// The ordered, immutable sequence of checks a checker dispatches.
pub struct CheckChain<A> {
    checks: Arc<[Check<A>]>,
}

impl<A> CheckChain<A> {
    pub fn new(checks: Vec<Check<A>>) -> Self {
        Self { checks: checks.into() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Check<A>> {
        self.checks.get(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Check<A>> {
        self.checks.iter()
    }

    /// Resolves a position token to a chain index.
    ///
    /// Indices must be inside the chain; names match the first check that
    /// carries them.
    pub fn resolve(&self, position: &Position) -> Result<usize, InvalidPosition> {
        let index = match position {
            Position::Index(index) => Some(*index).filter(|index| *index < self.len()),
            Position::Name(name) => {
                self.checks.iter().position(|check| check.name() == Some(name.as_str()))
            },
        };

        index.ok_or_else(|| InvalidPosition::new(position.clone()))
    }
}

impl<A> Clone for CheckChain<A> {
    fn clone(&self) -> Self {
        Self { checks: Arc::clone(&self.checks) }
    }
}

impl<A> Debug for CheckChain<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.checks.iter()).finish()
    }
}

impl<A> From<Vec<Check<A>>> for CheckChain<A> {
    fn from(checks: Vec<Check<A>>) -> Self {
        Self::new(checks)
    }
}

impl<A> FromIterator<Check<A>> for CheckChain<A> {
    fn from_iter<I: IntoIterator<Item = Check<A>>>(iter: I) -> Self {
        Self { checks: iter.into_iter().collect() }
    }
}
