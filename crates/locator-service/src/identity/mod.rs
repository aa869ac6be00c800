//! Recovery from spoken names that match no registered user exactly.

pub mod fuzzy;

pub use fuzzy::{FuzzyMatch, FuzzyResolver};
