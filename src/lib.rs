//! # lenient-utils
//!
//! Best-effort normalization helpers for input that arrives in slightly
//! wrong shapes: numeric tokens written with either decimal separator,
//! keyed collections that imply a set of acceptable equivalents, and
//! sequences whose ordering needs checking.
//!
//! Every entry point is a synchronous pure function over its inputs; the
//! components never call each other and hold no shared state, so they are
//! safe to use from any number of threads.

pub use error::ParseError;

/// Core components (independent, composed only at call sites)
pub mod numeric; // Lenient numeric-token parsing
pub mod sequence; // Alternative-set expansion and ordering checks

/// Support modules
pub mod error; // Error handling
pub mod helpers; // Small stand-alone helpers

pub type Result<T> = std::result::Result<T, ParseError>;

/// Prelude module for convenient imports.
///
/// ```rust
/// use lenient_utils::prelude::*;
///
/// assert_eq!(parse_number::<f64>("2,5"), Ok(2.5));
/// assert!(is_monotonic([1, 2, 3], true));
/// ```
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::ParseError;
    pub use crate::numeric::{InvariantParse, parse_number};
    pub use crate::sequence::{expand_alternatives, is_monotonic};
}
