//! Core matcher trait and logical combinators
//!
//! This module provides the foundational `Matcher` trait and the combinators
//! for negating and chaining matchers.

use std::sync::Arc;

use crate::failure::MatchFailure;
use crate::result::MatchResult;

/// A composable matcher over values of type T.
///
/// A matcher answers two independent questions about an actual value: does it
/// match, and does it *not* match. The second is its own judgment rather than
/// the first with the flag flipped, because the expected and actual messages
/// swap roles too. `IsNull` expects "was Null" when matching but "wasn't Null"
/// when not matching.
///
/// Implementations must be pure: the result may depend only on `actual` and
/// state captured at construction.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// let in_range = is_not_equal_to(0).and(is_not_equal_to(100));
/// assert!(in_range.matches(&50).passed());
/// assert!(in_range.matches(&0).failed());
/// assert!(in_range.not_matches(&0).passed());
/// ```
pub trait Matcher<T: ?Sized>: Send + Sync {
    /// Check that `actual` matches.
    fn matches(&self, actual: &T) -> MatchResult;

    /// Check that `actual` does not match.
    fn not_matches(&self, actual: &T) -> MatchResult;
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    #[inline]
    fn matches(&self, actual: &T) -> MatchResult {
        (**self).matches(actual)
    }

    #[inline]
    fn not_matches(&self, actual: &T) -> MatchResult {
        (**self).not_matches(actual)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    #[inline]
    fn matches(&self, actual: &T) -> MatchResult {
        (**self).matches(actual)
    }

    #[inline]
    fn not_matches(&self, actual: &T) -> MatchResult {
        (**self).not_matches(actual)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Arc<M> {
    #[inline]
    fn matches(&self, actual: &T) -> MatchResult {
        (**self).matches(actual)
    }

    #[inline]
    fn not_matches(&self, actual: &T) -> MatchResult {
        (**self).not_matches(actual)
    }
}

/// A type-erased matcher.
///
/// Useful for storing matchers of different concrete types together, and
/// required by the runtime folds [`all_of`](crate::matcher::all_of) and
/// [`any_of`](crate::matcher::any_of).
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// let matchers: Vec<BoxedMatcher<'_, i32>> = vec![
///     is_equal_to(1).boxed(),
///     is_not_equal_to(2).boxed(),
///     is_equal_to(1).or(is_equal_to(3)).boxed(),
/// ];
///
/// assert!(matchers.iter().all(|m| m.matches(&1).passed()));
/// ```
pub type BoxedMatcher<'a, T> = Box<dyn Matcher<T> + 'a>;

/// Extension trait for matcher combinators.
///
/// Provides method chaining for combining matchers. All combinators return
/// concrete types, so chains are statically dispatched unless boxed.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// let m = is_equal_to(5).or(is_equal_to(6)).not();
/// assert!(m.matches(&7).passed());
/// assert!(m.matches(&5).failed());
/// ```
pub trait MatcherExt<T: ?Sized>: Matcher<T> + Sized {
    /// Combine with AND logic. Same as [`both`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillmatch::prelude::*;
    ///
    /// let m = is_not_null::<i32>().and(is_not_equal_to(Some(0)));
    /// assert!(m.matches(&Some(3)).passed());
    /// assert!(m.matches(&Some(0)).failed());
    /// assert!(m.matches(&None).failed());
    /// ```
    fn and<M: Matcher<T>>(self, other: M) -> And<Self, M> {
        And(self, other)
    }

    /// Combine with OR logic. Same as [`either`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillmatch::prelude::*;
    ///
    /// let m = is_equal_to(5).or(is_equal_to(6));
    /// assert!(m.matches(&6).passed());
    /// assert!(m.matches(&7).failed());
    /// ```
    fn or<M: Matcher<T>>(self, other: M) -> Or<Self, M> {
        Or(self, other)
    }

    /// Invert the matcher. Same as [`not`].
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Invert the matcher with a replacement expected message. Same as
    /// [`invert`].
    fn invert(self, expected: impl Into<String>) -> Invert<Self> {
        invert(self, expected)
    }

    /// Erase the concrete type.
    fn boxed<'a>(self) -> BoxedMatcher<'a, T>
    where
        Self: 'a,
    {
        Box::new(self)
    }

    /// Match `actual` and turn a failing outcome into an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillmatch::prelude::*;
    ///
    /// assert!(is_equal_to(3).check(&3).is_ok());
    /// assert!(is_equal_to(3).check(&4).is_err());
    /// ```
    fn check(&self, actual: &T) -> Result<MatchResult, MatchFailure> {
        let result = self.matches(actual);
        #[cfg(feature = "tracing")]
        if result.failed() {
            tracing::debug!(
                expected = result.expected(),
                actual = result.actual(),
                "matcher check failed"
            );
        }
        result.into_result()
    }
}

impl<T: ?Sized, M: Matcher<T>> MatcherExt<T> for M {}

/// NOT combinator - swaps `matches` and `not_matches`.
///
/// The wrapped matcher's own negative judgment is used, so the messages come
/// out with the right polarity.
#[derive(Clone, Copy, Debug)]
pub struct Not<M>(pub M);

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Not<M> {
    #[inline]
    fn matches(&self, actual: &T) -> MatchResult {
        self.0.not_matches(actual)
    }

    #[inline]
    fn not_matches(&self, actual: &T) -> MatchResult {
        self.0.matches(actual)
    }
}

/// Invert a matcher.
///
/// This is a quick inverter meant for short-term use. A matcher that needs a
/// permanent inverse should get its own factory with a proper name (`is_open`
/// gets `is_closed`) that calls `not` internally, the way
/// [`is_not_null`](crate::matcher::is_not_null) is built.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// let m = not(is_equal_to(5));
/// assert!(m.matches(&5).failed());
/// assert!(m.matches(&6).passed());
/// ```
pub fn not<M>(matcher: M) -> Not<M> {
    Not(matcher)
}

/// Inverting matcher with its own expected message.
///
/// Created by [`invert`].
#[derive(Clone, Debug)]
pub struct Invert<M> {
    matcher: M,
    expected: String,
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Invert<M> {
    fn matches(&self, actual: &T) -> MatchResult {
        let original = self.matcher.matches(actual);
        MatchResult::new(
            original.passed(),
            self.expected.clone(),
            original.expected().to_string(),
        )
    }

    #[inline]
    fn not_matches(&self, actual: &T) -> MatchResult {
        self.matcher.matches(actual)
    }
}

/// Invert a matcher, replacing its expected message.
///
/// Like [`not`], but the swapped-in on-failure text of the original matcher
/// is rarely a good description of what the inverse expects. `invert` lets
/// the caller supply it. The original's expected text becomes the on-failure
/// text.
///
/// It is verbose for inline use; its intended home is a named factory.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// fn is_not_zero() -> impl Matcher<i32> {
///     invert(is_equal_to(0), "wasn't zero")
/// }
///
/// let result = is_not_zero().matches(&0);
/// assert!(result.failed());
/// assert_eq!(result.expected(), "\twasn't zero");
/// assert_eq!(result.actual(), "\tequaled 0");
/// ```
pub fn invert<M>(matcher: M, expected: impl Into<String>) -> Invert<M> {
    Invert {
        matcher,
        expected: expected.into(),
    }
}

/// AND combinator - both matchers must match.
///
/// Both sides are always evaluated, so a failure reports the details of
/// every branch.
#[derive(Clone, Copy, Debug)]
pub struct And<M1, M2>(pub M1, pub M2);

impl<T: ?Sized, M1: Matcher<T>, M2: Matcher<T>> Matcher<T> for And<M1, M2> {
    fn matches(&self, actual: &T) -> MatchResult {
        let one = self.0.matches(actual);
        let two = self.1.matches(actual);
        chain("AND", one.failed() || two.failed(), &one, &two)
    }

    fn not_matches(&self, actual: &T) -> MatchResult {
        let one = self.0.matches(actual);
        let two = self.1.matches(actual);
        chain("NOT AND", one.passed() && two.passed(), &one, &two)
    }
}

/// Combine two matchers with AND logic.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// let m = both(is_equal_to(Some(5)), is_not_null::<i32>());
/// let result = m.matches(&Some(5));
/// assert!(result.passed());
/// assert!(result.expected().contains("AND("));
/// assert!(result.expected().contains("equaled Some(5)"));
/// assert!(result.expected().contains("wasn't Null"));
/// ```
pub fn both<M1, M2>(first: M1, second: M2) -> And<M1, M2> {
    And(first, second)
}

/// OR combinator - at least one matcher must match.
///
/// Both sides are always evaluated.
#[derive(Clone, Copy, Debug)]
pub struct Or<M1, M2>(pub M1, pub M2);

impl<T: ?Sized, M1: Matcher<T>, M2: Matcher<T>> Matcher<T> for Or<M1, M2> {
    fn matches(&self, actual: &T) -> MatchResult {
        let one = self.0.matches(actual);
        let two = self.1.matches(actual);
        chain("OR", one.failed() && two.failed(), &one, &two)
    }

    fn not_matches(&self, actual: &T) -> MatchResult {
        let one = self.0.matches(actual);
        let two = self.1.matches(actual);
        chain("NOT OR", one.passed() || two.passed(), &one, &two)
    }
}

/// Combine two matchers with OR logic.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// let m = either(is_equal_to(5), is_equal_to(6));
/// assert!(m.matches(&5).passed());
/// assert!(m.matches(&7).failed());
/// ```
pub fn either<M1, M2>(first: M1, second: M2) -> Or<M1, M2> {
    Or(first, second)
}

fn chain(label: &str, failed: bool, one: &MatchResult, two: &MatchResult) -> MatchResult {
    #[cfg(feature = "tracing")]
    tracing::trace!(combinator = label, failed, "compound matcher evaluated");

    MatchResult::with_actual(
        failed,
        format!("{}(\n{}\n{})", label, one.expected(), two.expected()),
        format!("{}(\n{}\n{})", label, one.on_failure(), two.on_failure()),
        format!("{}(\n{}\n{})", label, one.actual(), two.actual()),
    )
}
