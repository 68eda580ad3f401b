use crate::cursor::Cursor;
use crate::dictionary::{raise_with, ErrorDictionary};
use crate::types::{ErrorHistory, Message, NamedError};

/// What a check sees while it runs.
///
/// The context borrows from the dispatching cursor and only lives for the
/// duration of one check invocation.
///
/// # Examples
///
/// ```
/// use snug_error::{checker_with, Check, CheckResult, CheckContext, ErrorDictionary};
///
/// fn required(ctx: &CheckContext<'_, i64>, args: &[i64]) -> CheckResult {
///     if args.is_empty() {
///         return ctx.throw("E001", &[]);
///     }
///     Ok(())
/// }
///
/// let dictionary = ErrorDictionary::new().entry("E001", |_: &[i64]| "ERRO 1".to_string());
/// let cursor = checker_with(dictionary, vec![Check::named("required", required)]).call([]);
///
/// let err = cursor.next(&[]).unwrap_err();
/// assert_eq!(err.code(), Some("E001"));
/// assert_eq!(err.message(), "ERRO 1");
/// ```
pub struct CheckContext<'a, A> {
    pub(crate) methods: &'a Cursor<A>,
    pub(crate) index: usize,
    pub(crate) error_name: Option<&'a str>,
    pub(crate) message: Option<&'a Message>,
}

impl<'a, A> CheckContext<'a, A> {
    /// The arguments the checker was originally called with.
    #[inline]
    pub fn params(&self) -> &'a [A] {
        self.methods.params()
    }

    /// Name of the running check, if it has one.
    #[inline]
    pub fn error_name(&self) -> Option<&'a str> {
        self.error_name
    }

    /// Message bound to the view that dispatched this check.
    #[inline]
    pub fn message(&self) -> Option<&'a Message> {
        self.message
    }

    /// Chain index of the running check.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The live cursor of this family, with no message bound.
    ///
    /// Calls made through it share the auto-advance counter and the history
    /// with the cursor that dispatched this check.
    #[inline]
    pub fn methods(&self) -> &'a Cursor<A> {
        self.methods
    }

    /// Snapshot of the family's failure history.
    #[inline]
    pub fn errors(&self) -> ErrorHistory {
        self.methods.errors()
    }

    #[inline]
    pub fn dictionary(&self) -> Option<&'a ErrorDictionary<A>> {
        self.methods.family.core.dictionary.as_ref()
    }

    /// Builds the failure for `code`, resolving it through the dictionary.
    pub fn fail(&self, code: &str, args: &[A]) -> NamedError {
        raise_with(self.dictionary(), code, args)
    }

    /// Always returns `Err` with the failure for `code`.
    ///
    /// Meant to be returned straight from a check: `return ctx.throw("E001", &[]);`
    #[inline]
    pub fn throw<T>(&self, code: &str, args: &[A]) -> Result<T, NamedError> {
        Err(self.fail(code, args))
    }
}
