//! Small stand-alone helpers shared by callers of the core components.

pub mod compare;
pub mod text;

pub use compare::{is_between, is_one_of};
pub use text::{display_or_empty, first_non_empty, is_digits_only};
