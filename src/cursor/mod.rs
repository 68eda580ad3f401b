//! Replayable check cursors.
//!
//! Calling a [`Checker`](crate::Checker) allocates one cursor family: the call
//! arguments, an auto-advance counter and an append-only [`ErrorHistory`].
//! Every [`Cursor`] view derived from it, whether through
//! [`message`](Cursor::message), [`error`](Cursor::error) or
//! [`repeat_next`](Cursor::repeat_next), shares that state by reference and
//! only overrides its own message or pinned position.
//!
//! # Examples
//!
//! ```
//! use snug_error::{checker, Check};
//!
//! let checker = checker(vec![
//!     Check::new(|_, args: &[i64]| if args[0] > 0 { Ok(()) } else { Err("not positive".into()) }),
//!     Check::named("even", |_, args: &[i64]| {
//!         if args[0] % 2 == 0 { Ok(()) } else { Err("odd".into()) }
//!     }),
//! ]);
//!
//! let cursor = checker.call([]);
//! assert!(cursor.next(&[3]).is_ok());
//! assert!(cursor.next(&[3]).is_err());
//!
//! // Derived views write to the same history.
//! let pinned = cursor.message("again").error("even").unwrap();
//! assert!(pinned.call(&[5]).is_err());
//! assert_eq!(cursor.errors().len(), 2);
//! ```
use crate::factory::CheckerCore;
use crate::types::alloc_type::{Arc, Rc, Vec};
use crate::types::{
    CheckResult, ErrorHistory, InvalidPosition, Message, MessageBinding, NamedError, Position,
};
use core::cell::{Cell, RefCell};
use core::fmt::{Debug, Formatter};

mod context;

pub use context::CheckContext;

/// State shared by every view of one checker call.
pub(crate) struct Family<A> {
    pub(crate) core: Arc<CheckerCore<A>>,
    params: Vec<A>,
    next_index: Cell<usize>,
    history: RefCell<ErrorHistory>,
}

impl<A> Family<A> {
    /// Appends `error` to the history, notifies the observer and hands it back.
    fn record(&self, error: NamedError) -> NamedError {
        self.history.borrow_mut().push(error.clone());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            name = error.name(),
            message = error.message(),
            recorded = self.history.borrow().len(),
            "check failed"
        );

        if let Some(on_error) = &self.core.on_error {
            on_error(&error);
        }
        error
    }
}

/// A view onto one cursor family.
///
/// The cursor returned by [`Checker::call`](crate::Checker::call) auto-advances
/// through the chain: the n-th [`next`](Self::next) across the family runs
/// check n - 1. Views built with [`message`](Self::message) carry their own
/// message and nothing else of their own.
pub struct Cursor<A> {
    pub(crate) family: Rc<Family<A>>,
    message: MessageBinding,
}

impl<A> Cursor<A> {
    pub(crate) fn start(core: Arc<CheckerCore<A>>, params: Vec<A>) -> Self {
        let family = Family {
            core,
            params,
            next_index: Cell::new(0),
            history: RefCell::new(ErrorHistory::new()),
        };
        Self { family: Rc::new(family), message: MessageBinding::none() }
    }

    /// Runs the check at the family's auto-advance position and moves it forward.
    ///
    /// A failure is recorded in the shared history and returned; running past
    /// the end of the chain fails with an [`Exhausted`](crate::ErrorKind::Exhausted)
    /// error, which is recorded too.
    pub fn next(&self, args: &[A]) -> CheckResult {
        self.advance(self.message.first(), args)
    }

    /// Returns a driver that calls [`next`](Self::next) `count` times.
    ///
    /// Repetition `i + 1` receives message `i` of this view's binding, or no
    /// message once the binding runs out.
    #[inline]
    pub fn repeat_next(&self, count: usize) -> Repeat<A> {
        Repeat { cursor: self.clone(), count }
    }

    /// Derives a view carrying `value` as its message.
    ///
    /// The original view and any sibling views keep their own messages.
    #[must_use]
    pub fn message(&self, value: impl Into<MessageBinding>) -> Cursor<A> {
        Self { family: Rc::clone(&self.family), message: value.into() }
    }

    /// Pins a view to the check at `position`, resolved right now.
    ///
    /// The pinned view keeps this view's first message. An unknown name or an
    /// index outside the chain is returned as [`InvalidPosition`] without
    /// touching the history.
    pub fn error(
        &self,
        position: impl Into<Position>,
    ) -> Result<PinnedCursor<A>, InvalidPosition> {
        let position = position.into();
        let index = self.family.core.chain.resolve(&position).inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "unresolved check position");
        })?;

        let cursor = Self { family: Rc::clone(&self.family), message: self.message.head() };
        Ok(PinnedCursor { cursor, index })
    }

    /// Calls [`next`](Self::next) once per check in the chain.
    ///
    /// Every call carries this view's first message; the first failure stops
    /// the sweep.
    pub fn check_all(&self, args: &[A]) -> CheckResult {
        let message = self.message.first();
        for _ in 0..self.family.core.chain.len() {
            self.advance(message, args)?;
        }
        Ok(())
    }

    /// Snapshot of every failure recorded by this family so far.
    pub fn errors(&self) -> ErrorHistory {
        self.family.history.borrow().clone()
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.family.history.borrow().len()
    }

    pub fn last_error(&self) -> Option<NamedError> {
        self.family.history.borrow().last().cloned()
    }

    /// The arguments the checker was called with.
    #[inline]
    pub fn params(&self) -> &[A] {
        &self.family.params
    }

    /// Index the next auto-advancing call will run.
    #[inline]
    pub fn position(&self) -> usize {
        self.family.next_index.get()
    }

    /// The message binding of this view.
    #[inline]
    pub fn bound_message(&self) -> &MessageBinding {
        &self.message
    }

    /// Number of checks in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.family.core.chain.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.family.core.chain.is_empty()
    }

    fn advance(&self, message: Option<&Message>, args: &[A]) -> CheckResult {
        let index = self.family.next_index.get();
        // Bumped before dispatch so re-entrant calls from the check move on.
        self.family.next_index.set(index + 1);
        self.dispatch(index, message, args)
    }

    fn dispatch(&self, index: usize, message: Option<&Message>, args: &[A]) -> CheckResult {
        let chain = &self.family.core.chain;
        let outcome = match chain.get(index) {
            Some(check) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(index, check = ?check.name(), "dispatching check");

                let methods =
                    Self { family: Rc::clone(&self.family), message: MessageBinding::none() };
                let ctx =
                    CheckContext { methods: &methods, index, error_name: check.name(), message };
                check.run(&ctx, args)
            },
            None => Err(NamedError::exhausted(index, chain.len())),
        };

        outcome.map_err(|error| self.family.record(error))
    }
}

impl<A> Clone for Cursor<A> {
    fn clone(&self) -> Self {
        Self { family: Rc::clone(&self.family), message: self.message.clone() }
    }
}

impl<A> Debug for Cursor<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position())
            .field("message", &self.message)
            .field("errors", &self.error_count())
            .finish_non_exhaustive()
    }
}

/// A view fixed to one chain entry by [`Cursor::error`].
///
/// Calling it any number of times re-runs the same check; the family's
/// auto-advance counter is left alone.
pub struct PinnedCursor<A> {
    cursor: Cursor<A>,
    index: usize,
}

impl<A> PinnedCursor<A> {
    /// Runs the pinned check with `args`.
    pub fn call(&self, args: &[A]) -> CheckResult {
        self.cursor.dispatch(self.index, self.cursor.message.first(), args)
    }

    /// Chain index this view is pinned to.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The unpinned view sharing this family, with the same message.
    #[inline]
    pub fn cursor(&self) -> &Cursor<A> {
        &self.cursor
    }
}

impl<A> Clone for PinnedCursor<A> {
    fn clone(&self) -> Self {
        Self { cursor: self.cursor.clone(), index: self.index }
    }
}

impl<A> Debug for PinnedCursor<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PinnedCursor")
            .field("index", &self.index)
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Driver returned by [`Cursor::repeat_next`].
pub struct Repeat<A> {
    cursor: Cursor<A>,
    count: usize,
}

impl<A> Repeat<A> {
    /// Runs the repetitions in order, stopping at the first failure.
    pub fn call(&self, args: &[A]) -> CheckResult {
        let messages = &self.cursor.message;
        (0..self.count)
            .try_for_each(|repetition| self.cursor.advance(messages.get(repetition), args))
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<A> Clone for Repeat<A> {
    fn clone(&self) -> Self {
        Self { cursor: self.cursor.clone(), count: self.count }
    }
}

impl<A> Debug for Repeat<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Repeat").field("count", &self.count).field("cursor", &self.cursor).finish()
    }
}
