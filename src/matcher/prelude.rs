//! Matcher prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use stillmatch::matcher::prelude::*;
//!
//! let m = either(is_equal_to(1), is_equal_to(2));
//! assert!(m.matches(&2).passed());
//! ```

// Core traits
pub use super::combinators::{BoxedMatcher, Matcher, MatcherExt};

// Logical combinators
pub use super::combinators::{both, either, invert, not};

// Folds
pub use super::fold::{all_of, any_of, combine};

// Basic matchers
pub use super::basic::{is_equal_to, is_not_equal_to, is_not_null, is_null};
