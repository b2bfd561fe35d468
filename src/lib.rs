//! # Stillmatch
//!
//! > *"Still waters run pure"*
//!
//! A Rust library of composable, side-effect-free matchers.
//!
//! ## Philosophy
//!
//! A matcher compares an actual value against an expectation and returns a
//! [`MatchResult`] describing the comparison. It never panics or asserts on a
//! mismatch. Because matchers are pure values they compose freely:
//! - **NOT** swaps a matcher's positive and negative checks
//! - **AND** / **OR** evaluate both branches and merge their messages
//! - **all_of** / **any_of** fold any number of matchers left to right
//!
//! ## Quick Example
//!
//! ```rust
//! use stillmatch::prelude::*;
//!
//! let m = is_not_null::<i32>().and(either(is_equal_to(Some(5)), is_equal_to(Some(6))));
//!
//! assert!(m.matches(&Some(5)).passed());
//!
//! let result = m.matches(&Some(7));
//! assert!(result.failed());
//! println!("expected:\n{}\nactual:\n{}", result.expected(), result.actual());
//!
//! // Leave matcher-land with `?`
//! fn check(value: Option<i32>) -> Result<(), MatchFailure> {
//!     is_not_null::<i32>().check(&value)?;
//!     Ok(())
//! }
//! assert!(check(None).is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events when compound matchers are evaluated
//!   and when [`MatcherExt::check`](matcher::MatcherExt::check) fails
//! - `serde`: `Serialize`/`Deserialize` for [`MatchResult`]
//! - `proptest`: `Arbitrary` for [`MatchResult`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod failure;
pub mod matcher;
pub mod result;
pub mod testing;

// Re-exports
pub use failure::MatchFailure;
pub use matcher::{all_of, any_of, BoxedMatcher, Matcher, MatcherExt};
pub use result::{MatchResult, ResultBuilder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::failure::MatchFailure;
    pub use crate::matcher::prelude::*;
    pub use crate::result::{MatchResult, ResultBuilder};
}
