//! Lenient numeric-token parsing.
//!
//! Numeric input arriving from mixed-locale sources may use either `.` or
//! `,` as its decimal separator, but never both in the same token. This
//! module parses such tokens into any primitive numeric type.

pub mod invariant;
pub mod lenient;

pub use invariant::InvariantParse;
pub use lenient::parse_number;
