//! Clock abstraction for "today" lookups.
//!
//! Nothing in the calculation core reads the wall clock. Callers that want
//! the current date pass a [`Clock`], which tests can pin with
//! [`FixedClock`].

use crate::date::CalendarDate;

/// Source of the current calendar date.
pub trait Clock {
    /// The current date in the clock's reference timezone.
    fn today(&self) -> CalendarDate;
}

/// A clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: CalendarDate,
}

impl FixedClock {
    pub fn new(date: CalendarDate) -> Self {
        FixedClock { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.date
    }
}

/// The system clock, read as a UTC date (requires `chrono` feature).
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "chrono")]
impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        chrono::Utc::now().date_naive().into()
    }
}
