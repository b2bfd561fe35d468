//! Basic matchers
//!
//! Matchers that apply to any value: absence checks over `Option` and
//! equality checks over `PartialEq` types.

use std::fmt::{self, Debug};
use std::marker::PhantomData;

use super::combinators::{not, Matcher, Not};
use crate::result::{MatchResult, ResultBuilder};

/// Matcher for absence (`None`).
pub struct IsNull<T: ?Sized> {
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Clone for IsNull<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for IsNull<T> {}

impl<T: ?Sized> Debug for IsNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IsNull")
    }
}

impl<T> Matcher<Option<T>> for IsNull<T> {
    fn matches(&self, actual: &Option<T>) -> MatchResult {
        ResultBuilder::with_messages("was Null", "wasn't Null").passed_if(actual.is_none())
    }

    fn not_matches(&self, actual: &Option<T>) -> MatchResult {
        ResultBuilder::with_messages("wasn't Null", "was Null").passed_if(actual.is_some())
    }
}

/// Create a matcher that checks the value is `None`.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// assert!(is_null::<String>().matches(&None).passed());
/// assert!(is_null::<String>().matches(&Some("x".to_string())).failed());
/// ```
pub fn is_null<T>() -> IsNull<T> {
    IsNull {
        _marker: PhantomData,
    }
}

/// Create a matcher that checks the value is `Some`.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// let result = is_not_null::<i32>().matches(&None);
/// assert!(result.failed());
/// assert_eq!(result.expected(), "\twasn't Null");
/// ```
pub fn is_not_null<T>() -> Not<IsNull<T>> {
    not(is_null())
}

/// Matcher for equality with an expected value.
#[derive(Clone, Debug)]
pub struct Equals<T> {
    expected: T,
    description: String,
}

impl<T: PartialEq + Debug + Send + Sync> Matcher<T> for Equals<T> {
    fn matches(&self, actual: &T) -> MatchResult {
        ResultBuilder::with_messages(self.description.as_str(), equaled(actual))
            .passed_if(self.expected == *actual)
    }

    fn not_matches(&self, actual: &T) -> MatchResult {
        ResultBuilder::with_messages(equaled(actual), self.description.as_str())
            .passed_if(self.expected != *actual)
    }
}

fn equaled<T: Debug + ?Sized>(value: &T) -> String {
    format!("equaled {:?}", value)
}

/// Create a matcher that checks the value equals `expected`.
///
/// Equality is the type's `PartialEq`, and messages use its `Debug` output.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// assert!(is_equal_to(5).matches(&5).passed());
///
/// let result = is_equal_to(5).matches(&6);
/// assert!(result.failed());
/// assert_eq!(result.expected(), "\tequaled 5");
/// assert_eq!(result.actual(), "\tequaled 6");
/// ```
pub fn is_equal_to<T: PartialEq + Debug + Send + Sync>(expected: T) -> Equals<T> {
    let description = equaled(&expected);
    Equals {
        expected,
        description,
    }
}

/// Create a matcher that checks the value differs from `expected`.
///
/// # Example
///
/// ```rust
/// use stillmatch::prelude::*;
///
/// assert!(is_not_equal_to("a").matches(&"b").passed());
/// assert!(is_not_equal_to("a").matches(&"a").failed());
/// ```
pub fn is_not_equal_to<T: PartialEq + Debug + Send + Sync>(expected: T) -> Not<Equals<T>> {
    not(is_equal_to(expected))
}
