//! Matchers and matcher combinators
//!
//! A matcher checks an actual value and reports a [`MatchResult`] instead of
//! panicking. Matchers compose with logical operators (`not`, `and`, `or`)
//! into larger matchers whose results carry the messages of every branch.
//!
//! # Philosophy
//!
//! Matchers only do the work of comparing expected and actual. Deciding what
//! to do with a failure is left to the caller, which means:
//!
//! - matchers never need to be mutable
//! - composing them is plain function composition
//! - the same matcher can back an assertion, a `?` check or a report
//!
//! # Example
//!
//! ```rust
//! use stillmatch::matcher::*;
//!
//! let m = is_not_null::<i32>().and(is_not_equal_to(Some(0)));
//!
//! let result = m.matches(&Some(0));
//! assert!(result.failed());
//! assert!(result.actual().starts_with("\tAND("));
//! ```
//!
//! # Negated compounds
//!
//! `not_matches` on a compound matcher is computed from the branches' own
//! `matches` results, so `not(both(a, b))` fails only when both `a` and `b`
//! match:
//!
//! ```rust
//! use stillmatch::matcher::*;
//!
//! let m = not(both(is_equal_to(5), is_equal_to(5)));
//! assert!(m.matches(&5).failed());
//! assert!(m.matches(&6).passed());
//! assert!(m.matches(&6).expected().starts_with("\tNOT AND("));
//! ```
//!
//! [`MatchResult`]: crate::MatchResult

mod basic;
mod combinators;
mod fold;

pub mod prelude;

// Re-export core trait
pub use combinators::{BoxedMatcher, Matcher, MatcherExt};

// Re-export combinators
pub use combinators::{both, either, invert, not, And, Invert, Not, Or};

// Re-export folds
pub use fold::{all_of, any_of, combine};

// Re-export basic matchers
pub use basic::{is_equal_to, is_not_equal_to, is_not_null, is_null, Equals, IsNull};
