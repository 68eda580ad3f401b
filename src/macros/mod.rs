//! Shorthands for declaring checks and raising failures from inside them.
//!
//! - [`macro@crate::check`] - Wraps a function or closure into a [`Check`](crate::Check),
//!   naming it after the function identifier when one is given.
//! - [`macro@crate::throw`] - Returns early from a check with the failure for a code.
//! - [`macro@crate::ensure`] - Throws unless a condition holds.
//!
//! # Examples
//!
//! ```
//! use snug_error::{check, checker_with, ensure, CheckContext, CheckResult, ErrorDictionary};
//!
//! fn in_range(ctx: &CheckContext<'_, i64>, args: &[i64]) -> CheckResult {
//!     ensure!(ctx, (1..=10).contains(&args[0]), "E003", args[0]);
//!     Ok(())
//! }
//!
//! let dictionary =
//!     ErrorDictionary::new().entry("E003", |args: &[i64]| format!("{} is out of range", args[0]));
//! let cursor = checker_with(dictionary, vec![check!(in_range)]).call([]);
//!
//! let pinned = cursor.error("in_range").unwrap();
//! assert!(pinned.call(&[4]).is_ok());
//! assert_eq!(pinned.call(&[42]).unwrap_err().message(), "42 is out of range");
//! ```

/// Builds a [`Check`](crate::Check).
///
/// # Syntax
///
/// - `check!(function)` - Named after the function identifier
/// - `check!("name" => expr)` - Explicitly named
/// - `check!(expr)` - Unnamed, typically a closure
///
/// # Examples
///
/// ```
/// use snug_error::{check, Check, CheckContext, CheckResult};
///
/// fn not_empty(_: &CheckContext<'_, String>, args: &[String]) -> CheckResult {
///     if args.iter().all(|arg| arg.is_empty()) {
///         return Err("empty input".into());
///     }
///     Ok(())
/// }
///
/// let named: Check<String> = check!(not_empty);
/// assert_eq!(named.name(), Some("not_empty"));
///
/// let renamed: Check<String> = check!("present" => not_empty);
/// assert_eq!(renamed.name(), Some("present"));
///
/// let anonymous: Check<String> = check!(|_, _| Ok(()));
/// assert_eq!(anonymous.name(), None);
/// ```
#[macro_export]
macro_rules! check {
    ($name:literal => $check:expr $(,)?) => {
        $crate::Check::named($name, $check)
    };
    ($check:ident $(,)?) => {
        $crate::Check::named(stringify!($check), $check)
    };
    ($check:expr $(,)?) => {
        $crate::Check::new($check)
    };
}

/// Returns early from a check with the failure `code` resolves to.
///
/// Expands to `return ctx.throw(code, &[args...])`, so it can only be used
/// inside a function or closure returning [`CheckResult`](crate::CheckResult).
///
/// # Examples
///
/// ```
/// use snug_error::{throw, CheckContext, CheckResult};
///
/// fn same(ctx: &CheckContext<'_, i64>, args: &[i64]) -> CheckResult {
///     if args[0] != args[1] {
///         throw!(ctx, "E002", args[0] + args[1]);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! throw {
    ($ctx:expr, $code:expr $(, $arg:expr)* $(,)?) => {
        return $ctx.throw($code, &[$($arg),*])
    };
}

/// Throws `code` through [`throw!`](crate::throw) unless `condition` holds.
#[macro_export]
macro_rules! ensure {
    ($ctx:expr, $condition:expr, $code:expr $(, $arg:expr)* $(,)?) => {
        if !$condition {
            $crate::throw!($ctx, $code $(, $arg)*);
        }
    };
}
