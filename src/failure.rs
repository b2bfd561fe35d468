//! Error type for failed matches
//!
//! Matchers report a mismatch through the `failed` flag of a
//! [`MatchResult`], never through an error. `MatchFailure` exists for callers
//! that want to leave matcher-land and propagate a failure with `?`.
//!
//! # Example
//!
//! ```rust
//! use stillmatch::prelude::*;
//!
//! fn check_answer(answer: i32) -> Result<(), MatchFailure> {
//!     is_equal_to(42).check(&answer)?;
//!     Ok(())
//! }
//!
//! assert!(check_answer(42).is_ok());
//!
//! let err = check_answer(7).unwrap_err();
//! assert_eq!(err.to_string(), "Expected that it:\n\tequaled 42\nbut it:\n\tequaled 7");
//! ```

use std::fmt;

use crate::result::MatchResult;

/// A failing [`MatchResult`] lifted into an error.
///
/// The `Display` output is the standard assertion message:
///
/// ```text
/// Expected that it:
///     <expected>
/// but it:
///     <actual>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFailure {
    result: MatchResult,
}

impl MatchFailure {
    /// Wrap a result.
    ///
    /// Usually obtained through [`MatchResult::into_result`] rather than
    /// called directly.
    pub fn new(result: MatchResult) -> Self {
        MatchFailure { result }
    }

    /// The failing result.
    pub fn result(&self) -> &MatchResult {
        &self.result
    }

    /// Unwrap into the failing result.
    pub fn into_inner(self) -> MatchResult {
        self.result
    }
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expected that it:\n{}\nbut it:\n{}",
            self.result.expected(),
            self.result.actual()
        )
    }
}

impl std::error::Error for MatchFailure {}

impl From<MatchFailure> for MatchResult {
    fn from(failure: MatchFailure) -> Self {
        failure.result
    }
}
