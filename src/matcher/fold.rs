//! Variadic AND/OR folds
//!
//! Rust has no variadic functions, so there are two spellings of `all_of` and
//! `any_of`:
//!
//! - the functions take two required matchers plus any iterable of
//!   [`BoxedMatcher`]s and fold them at runtime;
//! - the [`all_of!`](crate::all_of!) and [`any_of!`](crate::any_of!) macros
//!   take two or more matchers of any concrete types and fold them statically.
//!
//! Both build a left-deep tree: `((first AND second) AND others[0]) AND ...`,
//! so nested description text always nests the same way.

use super::combinators::{And, BoxedMatcher, MatcherExt, Or};

/// Left-fold matchers pairwise with `combiner`.
///
/// Applies `combiner(first, second)`, then folds in each of `others` in
/// order. Requiring `first` and `second` guarantees there is something to
/// combine.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// let m = combine(
///     |a, b| either(a, b).boxed(),
///     is_equal_to(1).boxed(),
///     is_equal_to(2).boxed(),
///     [is_equal_to(3).boxed()],
/// );
/// assert!(m.matches(&3).passed());
/// assert!(m.matches(&4).failed());
/// ```
pub fn combine<'a, T, F>(
    combiner: F,
    first: BoxedMatcher<'a, T>,
    second: BoxedMatcher<'a, T>,
    others: impl IntoIterator<Item = BoxedMatcher<'a, T>>,
) -> BoxedMatcher<'a, T>
where
    T: ?Sized + 'a,
    F: Fn(BoxedMatcher<'a, T>, BoxedMatcher<'a, T>) -> BoxedMatcher<'a, T>,
{
    others
        .into_iter()
        .fold(combiner(first, second), |combined, next| combiner(combined, next))
}

/// Create a matcher that passes only if all given matchers pass.
///
/// The results of every matcher are strung together in argument order.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// let m = all_of(
///     is_equal_to(Some(1)),
///     is_equal_to(Some(1)),
///     [is_not_null::<i32>().boxed()],
/// );
/// assert!(m.matches(&Some(1)).passed());
/// assert!(m.matches(&None).failed());
/// ```
pub fn all_of<'a, T, M1, M2>(
    first: M1,
    second: M2,
    others: impl IntoIterator<Item = BoxedMatcher<'a, T>>,
) -> BoxedMatcher<'a, T>
where
    T: ?Sized + 'a,
    M1: MatcherExt<T> + 'a,
    M2: MatcherExt<T> + 'a,
{
    combine(
        |a, b| And(a, b).boxed(),
        first.boxed(),
        second.boxed(),
        others,
    )
}

/// Create a matcher that passes if any of the given matchers pass.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// let m = any_of(is_equal_to(1), is_equal_to(2), [is_equal_to(3).boxed()]);
/// assert!(m.matches(&2).passed());
/// assert!(m.matches(&4).failed());
/// ```
pub fn any_of<'a, T, M1, M2>(
    first: M1,
    second: M2,
    others: impl IntoIterator<Item = BoxedMatcher<'a, T>>,
) -> BoxedMatcher<'a, T>
where
    T: ?Sized + 'a,
    M1: MatcherExt<T> + 'a,
    M2: MatcherExt<T> + 'a,
{
    combine(
        |a, b| Or(a, b).boxed(),
        first.boxed(),
        second.boxed(),
        others,
    )
}

/// Combine two or more matchers with AND logic, without boxing.
///
/// Expands to a left-deep chain of [`And`](crate::matcher::And).
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
/// use stillmatch::all_of;
///
/// let m = all_of!(is_not_null::<i32>(), is_not_equal_to(Some(0)), is_not_equal_to(Some(1)));
/// assert!(m.matches(&Some(2)).passed());
/// assert!(m.matches(&Some(1)).failed());
/// ```
#[macro_export]
macro_rules! all_of {
    (@fold $acc:expr) => {
        $acc
    };
    (@fold $acc:expr, $next:expr $(, $rest:expr)*) => {
        $crate::all_of!(@fold $crate::matcher::And($acc, $next) $(, $rest)*)
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::all_of!(@fold $crate::matcher::And($first, $second) $(, $rest)*)
    };
}

/// Combine two or more matchers with OR logic, without boxing.
///
/// Expands to a left-deep chain of [`Or`](crate::matcher::Or).
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
/// use stillmatch::any_of;
///
/// let m = any_of!(is_equal_to(1), is_equal_to(2), is_equal_to(3));
/// assert!(m.matches(&3).passed());
/// assert!(m.matches(&4).failed());
/// ```
#[macro_export]
macro_rules! any_of {
    (@fold $acc:expr) => {
        $acc
    };
    (@fold $acc:expr, $next:expr $(, $rest:expr)*) => {
        $crate::any_of!(@fold $crate::matcher::Or($acc, $next) $(, $rest)*)
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::any_of!(@fold $crate::matcher::Or($first, $second) $(, $rest)*)
    };
}
