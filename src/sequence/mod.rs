//! Sequence utilities: alternative-set expansion and ordering checks.

pub mod expand;
pub mod monotonic;

pub use expand::expand_alternatives;
pub use monotonic::is_monotonic;
