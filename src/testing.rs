//! Testing utilities and helpers for Stillmatch
//!
//! This module provides fixed matchers for exercising combinators, matchers
//! over [`MatchResult`] itself, assertion macros, and property-based testing
//! support.
//!
//! # Examples
//!
//! ## Fixed matchers
//!
//! ```rust
//! use stillmatch::prelude::*;
//! use stillmatch::testing::{fails, passes};
//!
//! let result = both(passes(), fails()).matches(&());
//! assert!(result.failed());
//! assert_eq!(result.actual(), "\tAND(\n\tpassed\n\tfailed)");
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use stillmatch::prelude::*;
//! use stillmatch::{assert_failed, assert_passed, assert_that};
//!
//! assert_that!(5, is_equal_to(5));
//! assert_passed!(is_null::<i32>().matches(&None));
//! assert_failed!(is_null::<i32>().matches(&Some(1)));
//! ```

use crate::matcher::Matcher;
use crate::result::{indent, MatchResult, ResultBuilder};

/// A matcher with a fixed outcome, for any value type.
///
/// Both outcomes use the messages "passed" and "failed", so the text of a
/// compound result shows which branch contributed what.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixed {
    fail: bool,
}

impl<T: ?Sized> Matcher<T> for Fixed {
    fn matches(&self, _actual: &T) -> MatchResult {
        MatchResult::new(self.fail, "passed", "failed")
    }

    fn not_matches(&self, _actual: &T) -> MatchResult {
        MatchResult::new(!self.fail, "passed", "failed")
    }
}

/// A matcher that always matches.
pub fn passes() -> Fixed {
    Fixed { fail: false }
}

/// A matcher that never matches.
pub fn fails() -> Fixed {
    Fixed { fail: true }
}

/// Matcher for a passing [`MatchResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Passed;

impl Matcher<MatchResult> for Passed {
    fn matches(&self, actual: &MatchResult) -> MatchResult {
        ResultBuilder::with_messages("passed", "failed").passed_if(actual.passed())
    }

    fn not_matches(&self, actual: &MatchResult) -> MatchResult {
        ResultBuilder::with_messages("failed", "passed").passed_if(actual.failed())
    }
}

/// Create a matcher that checks a result passed.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
/// use stillmatch::testing::passed;
///
/// assert!(passed().matches(&is_equal_to(1).matches(&1)).passed());
/// ```
pub fn passed() -> Passed {
    Passed
}

/// Matcher for a failing [`MatchResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Failed;

impl Matcher<MatchResult> for Failed {
    fn matches(&self, actual: &MatchResult) -> MatchResult {
        ResultBuilder::with_messages("failed", "passed").passed_if(actual.failed())
    }

    fn not_matches(&self, actual: &MatchResult) -> MatchResult {
        ResultBuilder::with_messages("passed", "failed").passed_if(actual.passed())
    }
}

/// Create a matcher that checks a result failed.
pub fn failed() -> Failed {
    Failed
}

/// Matcher for a failing [`MatchResult`] with a specific actual message.
///
/// Created by [`failed_with_message`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedWithMessage {
    message: String,
    expected: String,
}

impl FailedWithMessage {
    fn describe(actual: &MatchResult) -> String {
        if actual.failed() {
            format!("was a failing Result with message {:?}", actual.actual())
        } else {
            String::from("was a passing Result")
        }
    }

    fn holds(&self, actual: &MatchResult) -> bool {
        actual.failed() && actual.actual() == self.message
    }
}

impl Matcher<MatchResult> for FailedWithMessage {
    fn matches(&self, actual: &MatchResult) -> MatchResult {
        ResultBuilder::with_messages(self.expected.as_str(), Self::describe(actual))
            .passed_if(self.holds(actual))
    }

    fn not_matches(&self, actual: &MatchResult) -> MatchResult {
        ResultBuilder::with_messages(Self::describe(actual), self.expected.as_str())
            .passed_if(!self.holds(actual))
    }
}

/// Create a matcher that checks a result failed with the given actual text.
///
/// The message is compared after the same leading-tab normalisation that
/// [`MatchResult`] applies to its own descriptions.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
/// use stillmatch::testing::{failed_with_message, fails, passes};
///
/// let m: BoxedMatcher<'_, ()> = all_of(fails(), passes(), [passes().boxed()]);
/// let result = m.matches(&());
/// let check = failed_with_message("AND(\n\tAND(\n\tfailed\n\tpassed)\n\tpassed)");
/// assert!(check.matches(&result).passed());
/// ```
pub fn failed_with_message(message: impl Into<String>) -> FailedWithMessage {
    let message = indent(message.into());
    let expected = format!("was a failing Result with message {:?}", message);
    FailedWithMessage { message, expected }
}

/// Assert that a value satisfies a matcher.
///
/// Panics with the standard "Expected that it: ... but it: ..." message, or
/// with a custom formatted message when one is given.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
/// use stillmatch::assert_that;
///
/// assert_that!(Some(3), is_not_null::<i32>());
/// assert_that!(3, is_not_equal_to(4), "3 should never equal {}", 4);
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $matcher:expr $(,)?) => {
        match $crate::matcher::Matcher::matches(&$matcher, &$actual).into_result() {
            Ok(_) => {}
            Err(failure) => panic!("{}", failure),
        }
    };
    ($actual:expr, $matcher:expr, $fmt:literal $(, $args:expr)* $(,)?) => {
        if $crate::matcher::Matcher::matches(&$matcher, &$actual).failed() {
            panic!($fmt $(, $args)*);
        }
    };
}

/// Assert that a [`MatchResult`] passed.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
/// use stillmatch::assert_passed;
///
/// assert_passed!(is_equal_to(2).matches(&2));
/// ```
#[macro_export]
macro_rules! assert_passed {
    ($result:expr) => {{
        let result: &$crate::MatchResult = &$result;
        if result.failed() {
            panic!(
                "Expected passing result, got failure:\n{}",
                result.actual()
            );
        }
    }};
}

/// Assert that a [`MatchResult`] failed.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
/// use stillmatch::assert_failed;
///
/// assert_failed!(is_equal_to(2).matches(&3));
/// ```
#[macro_export]
macro_rules! assert_failed {
    ($result:expr) => {{
        let result: &$crate::MatchResult = &$result;
        if result.passed() {
            panic!(
                "Expected failing result, got pass:\n{}",
                result.actual()
            );
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for MatchResult {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (any::<bool>(), "[a-z][a-z ]{0,19}", "[a-z][a-z ]{0,19}")
            .prop_map(|(failed, expected, on_failure)| {
                MatchResult::new(failed, expected, on_failure)
            })
            .boxed()
    }
}
