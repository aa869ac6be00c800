//! Calendar source for "today" comparisons.

use chrono::{Local, NaiveDate};

/// Supplies the current local calendar date.
pub trait Clock: Send + Sync + std::fmt::Debug + 'static {
    /// The current date in the office's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation backed by the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
