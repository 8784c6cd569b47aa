//! miqat - Hijri calendar conversion and prayer time calculation
//!
//! Two independent, pure calculators:
//!
//! - the tabular Hijri calendar (Kuwaiti algorithm) converting to and from
//!   the Gregorian calendar through the Julian day, with English and Arabic
//!   month names and numerals;
//! - daily prayer times (Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha) from
//!   low-precision solar position formulas.
//!
//! ```
//! use miqat::{get_prayer_times, AsrConvention, CalculationMethod, CalendarDate, GeoLocation};
//!
//! let auckland = GeoLocation::new(-36.8485, 174.7633, 13.0);
//! let times = get_prayer_times(
//!     &auckland,
//!     CalendarDate::new(2026, 2, 12),
//!     CalculationMethod::Mwl,
//!     AsrConvention::Standard,
//!     13.0,
//! );
//! assert!(times.is_ordered());
//! ```

pub mod clock;
pub mod date;
pub mod error;
pub mod formatter;
pub mod hijri;
pub mod julian;
pub mod locale;
pub mod location;
pub mod math;
pub mod method;
pub mod options;
pub mod prayer;
pub mod source;
pub mod sun;

mod cache;

use std::fmt;
use std::str::FromStr;

pub use cache::TimesCache;
pub use clock::{Clock, FixedClock};
#[cfg(feature = "chrono")]
pub use clock::SystemClock;
pub use date::{CalendarDate, HijriDate};
pub use error::CalcError;
pub use hijri::{gregorian_to_hijri, hijri_to_gregorian};
pub use locale::{month_name, to_arabic_numerals, Language};
pub use location::{find_city, GeoLocation};
pub use method::{AsrConvention, CalculationMethod};
pub use options::{CalculationOptions, Strictness};
pub use prayer::{DailyTimes, Prayer, PrayerCalculator, PrayerTimeSet};
pub use source::{FallbackTimeSource, RemoteTimeSource, Unavailable};

/// Direction of a date conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Gregorian to Hijri (`"g2h"`)
    G2h,
    /// Hijri to Gregorian (`"h2g"`)
    H2g,
}

impl FromStr for Direction {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g2h" => Ok(Direction::G2h),
            "h2g" => Ok(Direction::H2g),
            _ => Err(CalcError::UnknownDirection { id: s.to_string() }),
        }
    }
}

/// A date in either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyDate {
    Gregorian(CalendarDate),
    Hijri(HijriDate),
}

impl fmt::Display for AnyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyDate::Gregorian(d) => fmt::Display::fmt(d, f),
            AnyDate::Hijri(d) => fmt::Display::fmt(d, f),
        }
    }
}

/// Convert `(year, month, day)` in the source calendar of `direction`.
pub fn convert_date(direction: Direction, year: i32, month: u32, day: u32) -> AnyDate {
    match direction {
        Direction::G2h => AnyDate::Hijri(gregorian_to_hijri(CalendarDate::new(year, month, day))),
        Direction::H2g => AnyDate::Gregorian(hijri_to_gregorian(HijriDate::new(year, month, day))),
    }
}

/// Prayer times for one day.
///
/// `timezone_offset_hours` overrides the offset stored in `location`.
/// Unreachable angles at high latitudes are clamped; use
/// [`PrayerCalculator::try_compute`] with [`Strictness::Strict`] to detect
/// them instead.
pub fn get_prayer_times(
    location: &GeoLocation,
    date: CalendarDate,
    method: CalculationMethod,
    asr: AsrConvention,
    timezone_offset_hours: f64,
) -> PrayerTimeSet {
    let location = location.with_timezone(timezone_offset_hours);
    PrayerCalculator::new(CalculationOptions::new(method, asr)).compute(&location, date)
}

/// Prayer times for every day of a Gregorian month, standard Asr.
pub fn get_monthly_timetable(
    location: &GeoLocation,
    year: i32,
    month: u32,
    method: CalculationMethod,
) -> Vec<DailyTimes> {
    PrayerCalculator::new(CalculationOptions::new(method, AsrConvention::Standard))
        .monthly_timetable(location, year, month)
}
