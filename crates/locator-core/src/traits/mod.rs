//! Core traits defined in `locator-core` and implemented or injected by
//! other crates.

pub mod clock;
pub mod random;

pub use clock::{Clock, FixedClock, SystemClock};
pub use random::{FixedIndexSource, IndexSource, ThreadRngSource};
