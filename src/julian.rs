//! Julian day conversion for the Gregorian calendar.
//!
//! The Julian day is the continuous day count shared by the Hijri converter
//! and the solar position formulas. Values returned here are for 0h UT of
//! the civil day, so they end in `.5`.

use crate::date::CalendarDate;

/// First Julian day number of the Gregorian calendar (1582-10-15).
const GREGORIAN_REFORM_JDN: i64 = 2299161;

/// Convert a Gregorian date to a Julian day.
///
/// Uses the proleptic Gregorian formula for every input, including dates
/// before the 1582 reform, and never fails.
pub fn gregorian_to_julian_day(date: CalendarDate) -> f64 {
    let mut y = date.year as i64;
    let mut m = date.month as i64;

    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716) as f64).floor() + (30.6001 * (m + 1) as f64).floor() + date.day as f64
        + b
        - 1524.5
}

/// Convert a Julian day back to a calendar date.
///
/// Days before JDN 2299161 are returned in the Julian calendar, so the
/// round trip with [`gregorian_to_julian_day`] is exact from 1582-10-15
/// onward.
pub fn julian_day_to_gregorian(jd: f64) -> CalendarDate {
    let shifted = jd + 0.5;
    let z = shifted.floor() as i64;

    let a = if z < GREGORIAN_REFORM_JDN {
        z
    } else {
        let alpha = ((z as f64 - 1867216.25) / 36524.25).floor() as i64;
        z + 1 + alpha - (alpha as f64 / 4.0).floor() as i64
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = b - d - (30.6001 * e as f64).floor() as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    CalendarDate::new(year as i32, month as u32, day as u32)
}
