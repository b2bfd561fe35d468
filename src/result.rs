//! Match results and the builder used to create them
//!
//! A [`MatchResult`] records the outcome of a single comparison: whether it
//! failed, what was expected, what a failure looks like, and what was actually
//! found. Matchers never panic on a mismatch; they hand back one of these.
//!
//! Messages are written in past tense. For example, an expected message of
//! "was empty" and an on-failure message of "contained 5 elements" render as:
//!
//! ```text
//! Expected that it:
//!     was empty
//! but it:
//!     contained 5 elements
//! ```
//!
//! Keeping one tense makes inverting a matcher a matter of swapping the two
//! messages.
//!
//! # Example
//!
//! ```rust
//! use stillmatch::ResultBuilder;
//!
//! let result = ResultBuilder::with_messages("was empty", "contained 5 elements");
//!
//! let passing = result.pass();
//! assert!(!passing.failed());
//! assert_eq!(passing.actual(), "\twas empty");
//!
//! let failing = result.fail();
//! assert!(failing.failed());
//! assert_eq!(failing.actual(), "\tcontained 5 elements");
//! ```

use crate::failure::MatchFailure;

/// The outcome of evaluating a matcher against an actual value.
///
/// Every description is stored with a single leading tab so that compound
/// results nest readably. A `MatchResult` is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    failed: bool,
    expected: String,
    on_failure: String,
    actual: String,
}

impl MatchResult {
    /// Create a result whose actual description is derived from the flag.
    ///
    /// A failing result reports `on_failure` as what actually happened, a
    /// passing one reports `expected`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillmatch::MatchResult;
    ///
    /// let result = MatchResult::new(true, "was Null", "wasn't Null");
    /// assert_eq!(result.actual(), "\twasn't Null");
    ///
    /// let result = MatchResult::new(false, "was Null", "wasn't Null");
    /// assert_eq!(result.actual(), "\twas Null");
    /// ```
    pub fn new(failed: bool, expected: impl Into<String>, on_failure: impl Into<String>) -> Self {
        let expected = expected.into();
        let on_failure = on_failure.into();
        let actual = if failed {
            on_failure.clone()
        } else {
            expected.clone()
        };
        Self::with_actual(failed, expected, on_failure, actual)
    }

    /// Create a result with an explicit actual description.
    ///
    /// Compound matchers use this to carry the merged actual text of their
    /// branches.
    pub fn with_actual(
        failed: bool,
        expected: impl Into<String>,
        on_failure: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        MatchResult {
            failed,
            expected: indent(expected.into()),
            on_failure: indent(on_failure.into()),
            actual: indent(actual.into()),
        }
    }

    /// Whether the comparison failed.
    #[inline]
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Whether the comparison passed.
    #[inline]
    pub fn passed(&self) -> bool {
        !self.failed
    }

    /// Description of what the matcher expected.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Description of what a failure looks like.
    pub fn on_failure(&self) -> &str {
        &self.on_failure
    }

    /// Description of what was actually found.
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// Convert into a `Result`, turning a failing outcome into an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillmatch::ResultBuilder;
    ///
    /// let ok = ResultBuilder::with_messages("passed", "failed").pass().into_result();
    /// assert!(ok.is_ok());
    ///
    /// let err = ResultBuilder::with_messages("passed", "failed").fail().into_result();
    /// assert_eq!(
    ///     err.unwrap_err().to_string(),
    ///     "Expected that it:\n\tpassed\nbut it:\n\tfailed"
    /// );
    /// ```
    pub fn into_result(self) -> Result<MatchResult, MatchFailure> {
        if self.failed {
            Err(MatchFailure::new(self))
        } else {
            Ok(self)
        }
    }
}

pub(crate) fn indent(message: String) -> String {
    if message.starts_with('\t') {
        message
    } else {
        format!("\t{}", message)
    }
}

/// Two-step construction of [`MatchResult`]s.
///
/// The messages are given up front and the polarity is decided later, so a
/// matcher writes its wording once for both outcomes.
///
/// # Example
///
/// ```rust
/// use stillmatch::ResultBuilder;
///
/// fn check_even(n: i32) -> stillmatch::MatchResult {
///     ResultBuilder::with_messages("was even", format!("was {}", n)).passed_if(n % 2 == 0)
/// }
///
/// assert!(check_even(4).passed());
/// assert!(check_even(3).failed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBuilder {
    expected: String,
    on_failure: String,
}

impl ResultBuilder {
    /// Start a builder with the expected and on-failure messages.
    pub fn with_messages(expected: impl Into<String>, on_failure: impl Into<String>) -> Self {
        ResultBuilder {
            expected: expected.into(),
            on_failure: on_failure.into(),
        }
    }

    /// A passing result with the stored messages.
    pub fn pass(&self) -> MatchResult {
        self.passed_if(true)
    }

    /// A failing result with the stored messages.
    pub fn fail(&self) -> MatchResult {
        self.passed_if(false)
    }

    /// A result that passes when `did_pass` is true and fails otherwise.
    pub fn passed_if(&self, did_pass: bool) -> MatchResult {
        MatchResult::new(!did_pass, self.expected.clone(), self.on_failure.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_and_fail_share_messages() {
        let builder = ResultBuilder::with_messages("was Null", "wasn't Null");

        let pass = builder.pass();
        let fail = builder.fail();

        assert!(!pass.failed());
        assert!(fail.failed());
        assert_eq!(pass.expected(), fail.expected());
        assert_eq!(pass.on_failure(), fail.on_failure());
    }

    #[test]
    fn actual_follows_polarity() {
        let builder = ResultBuilder::with_messages("equaled 5", "equaled 6");
        assert_eq!(builder.pass().actual(), "\tequaled 5");
        assert_eq!(builder.fail().actual(), "\tequaled 6");
    }

    #[test]
    fn passed_if_matches_pass_and_fail() {
        let builder = ResultBuilder::with_messages("a", "b");
        assert_eq!(builder.passed_if(true), builder.pass());
        assert_eq!(builder.passed_if(false), builder.fail());
    }

    #[test]
    fn indent_is_not_doubled() {
        let result = MatchResult::new(false, "\talready", "plain");
        assert_eq!(result.expected(), "\talready");
        assert_eq!(result.on_failure(), "\tplain");
    }

    #[test]
    fn with_actual_keeps_explicit_actual() {
        let result = MatchResult::with_actual(true, "x", "y", "z");
        assert_eq!(result.actual(), "\tz");
        assert!(result.failed());
        assert!(!result.passed());
    }

    #[test]
    fn into_result_splits_on_flag() {
        let pass = ResultBuilder::with_messages("passed", "failed").pass();
        assert_eq!(pass.clone().into_result(), Ok(pass));

        let fail = ResultBuilder::with_messages("passed", "failed").fail();
        let err = fail.clone().into_result().unwrap_err();
        assert_eq!(err.result(), &fail);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let result = ResultBuilder::with_messages("equaled 5", "equaled 6").fail();
        let json = serde_json::to_string(&result).unwrap();
        let restored: MatchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, result);
    }
}
