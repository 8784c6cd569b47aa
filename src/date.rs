//! Gregorian and Hijri calendar date values.
//!
//! Both types are plain values ordered by `(year, month, day)`. Construction
//! does not validate ranges; conversions accept any integers and the caller
//! is responsible for passing sane dates. Use [`CalendarDate::is_valid`] or
//! [`HijriDate::is_valid`] when input comes from outside.

use std::fmt;

use crate::error::CalcError;
use crate::locale::Language;

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given Gregorian year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a Gregorian month, or 0 for a month
/// outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Returns true if the Hijri year has 355 days in the tabular calendar.
///
/// Leap years are years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 of
/// each 30-year cycle.
pub fn is_hijri_leap_year(year: i32) -> bool {
    (11 * year as i64 + 14).rem_euclid(30) < 11
}

/// Returns the number of days in a tabular Hijri month, or 0 for a month
/// outside 1-12.
///
/// Odd months have 30 days and even months 29, except Dhu al-Hijjah which
/// gains a day in leap years.
pub fn days_in_hijri_month(year: i32, month: u32) -> u32 {
    match month {
        12 if is_hijri_leap_year(year) => 30,
        1..=12 if month % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        CalendarDate { year, month, day }
    }

    /// Build a date, rejecting months outside 1-12 and days past the end
    /// of the month.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, CalcError> {
        let date = CalendarDate::new(year, month, day);
        if date.is_valid() {
            Ok(date)
        } else {
            Err(CalcError::InvalidDate { year, month, day })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.day >= 1 && self.day <= days_in_month(self.year, self.month)
    }

    /// The following calendar day.
    pub fn succ(&self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            CalendarDate::new(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            CalendarDate::new(self.year, self.month + 1, 1)
        } else {
            CalendarDate::new(self.year + 1, 1, 1)
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        CalendarDate::new(date.year(), date.month(), date.day())
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<CalendarDate> for chrono::NaiveDate {
    type Error = CalcError;

    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        chrono::NaiveDate::from_ymd_opt(date.year, date.month, date.day).ok_or(
            CalcError::InvalidDate {
                year: date.year,
                month: date.month,
                day: date.day,
            },
        )
    }
}

/// A date in the tabular (arithmetical) Hijri calendar.
///
/// This is always a calculated estimate. It says nothing about whether a
/// month start was confirmed by sighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        HijriDate { year, month, day }
    }

    pub fn is_valid(&self) -> bool {
        self.day >= 1 && self.day <= days_in_hijri_month(self.year, self.month)
    }

    /// Localized month name, empty for an out-of-range month.
    pub fn month_name(&self, lang: Language) -> &'static str {
        crate::locale::month_name(self.month, lang)
    }

    /// Human-readable form, e.g. `"24 Sha'ban 1447 AH"`.
    pub fn format(&self, lang: Language) -> String {
        crate::formatter::format_hijri_date(self.day, self.month, self.year, lang)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
