//! Prayer time calculation
//!
//! Times are derived from the sun's declination and the equation of time
//! for the requested day. Each event is the moment the sun crosses a given
//! altitude, found from the hour-angle formula
//!
//! ```text
//! cos H = (-sin(angle) - sin(lat) sin(decl)) / (cos(lat) cos(decl))
//! ```
//!
//! where `angle` follows the convention of the classic PrayTimes tables:
//! morning events use `180 - depression`, evening events the depression
//! (or elevation) itself. Results are decimal hours of local civil time.
//!
//! ## High latitudes
//!
//! When `|cos H| > 1` the sun never reaches the angle that day. Under
//! [`Strictness::Lenient`] the value is clamped to ±1, which yields solar
//! midnight or solar noon for the affected event. Under
//! [`Strictness::Strict`] the calculation fails with
//! [`CalcError::PerpetualDaylight`] or [`CalcError::PerpetualDarkness`].

use std::convert::Infallible;
use std::fmt;

use crate::date::{days_in_month, CalendarDate};
use crate::error::CalcError;
use crate::formatter::{format_time_12h, format_time_12h_localized, format_time_24h};
use crate::julian::gregorian_to_julian_day;
use crate::locale::Language;
use crate::location::GeoLocation;
use crate::math::{darccos, darccot, dcos, dsin, dtan, fix_hour};
use crate::method::IshaRule;
use crate::options::{CalculationOptions, Strictness};
use crate::sun::sun_position;

/// Sun elevation correction for refraction and the solar semi-diameter,
/// in degrees.
pub const HORIZON_CORRECTION: f64 = 0.833;

/// The six daily events, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(self, lang: Language) -> &'static str {
        lang.locale().prayer_names[self as usize]
    }

    /// Sunrise marks the end of Fajr rather than a prayer of its own.
    pub fn is_prayer(self) -> bool {
        self != Prayer::Sunrise
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Language::En))
    }
}

/// A time rendered both ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTime {
    /// `H:MM AM` / `H:MM PM`
    pub twelve_hour: String,
    /// `HH:MM`
    pub twenty_four_hour: String,
}

impl FormattedTime {
    pub fn new(time: f64) -> Self {
        FormattedTime {
            twelve_hour: format_time_12h(time),
            twenty_four_hour: format_time_24h(time),
        }
    }
}

/// Prayer times for one day, in decimal hours of local civil time.
///
/// Values count from local midnight of the requested date and are not
/// wrapped, so an Isha that falls after midnight is stored as e.g. `25.04`.
/// This keeps the set ordered; the formatting helpers wrap into `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimeSet {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

/// The next upcoming prayer relative to a time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NextPrayer {
    pub prayer: Prayer,
    /// Decimal hours; `fajr + 24` when the next prayer is tomorrow's Fajr.
    pub time: f64,
    pub minutes_until: f64,
}

impl PrayerTimeSet {
    pub fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Time wrapped into `[0, 24)`.
    pub fn get_normalized(&self, prayer: Prayer) -> f64 {
        fix_hour(self.get(prayer))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, f64)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// True when every event is strictly later than the previous one.
    ///
    /// Clamped high-latitude results are typically not ordered.
    pub fn is_ordered(&self) -> bool {
        Prayer::ALL
            .windows(2)
            .all(|pair| self.get(pair[0]) < self.get(pair[1]))
    }

    pub fn formatted(&self, prayer: Prayer) -> FormattedTime {
        FormattedTime::new(self.get(prayer))
    }

    /// 12-hour rendering in the given language.
    pub fn format_localized(&self, prayer: Prayer, lang: Language) -> String {
        format_time_12h_localized(self.get(prayer), lang)
    }

    /// First prayer (sunrise excluded) strictly after `now`, a decimal hour
    /// of the same local day. After Isha this is the following Fajr,
    /// approximated with today's Fajr time.
    pub fn next_prayer(&self, now: f64) -> NextPrayer {
        let (prayer, time) = self
            .iter()
            .filter(|(p, _)| p.is_prayer())
            .find(|&(_, t)| t > now)
            .unwrap_or((Prayer::Fajr, self.fajr + 24.0));

        NextPrayer {
            prayer,
            time,
            minutes_until: (time - now) * 60.0,
        }
    }
}

/// Prayer times for one date of a timetable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTimes {
    pub date: CalendarDate,
    pub times: PrayerTimeSet,
}

/// Which side of the sun's altitude range the target angle fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unreachable {
    /// Sun stays above the angle for the whole day.
    AlwaysAbove,
    /// Sun stays below the angle for the whole day.
    AlwaysBelow,
}

impl Unreachable {
    fn into_error(self, prayer: Prayer) -> CalcError {
        match self {
            Unreachable::AlwaysAbove => CalcError::PerpetualDaylight { prayer },
            Unreachable::AlwaysBelow => CalcError::PerpetualDarkness { prayer },
        }
    }
}

fn cos_hour_angle(latitude: f64, declination: f64, angle: f64) -> f64 {
    (-dsin(angle) - dsin(latitude) * dsin(declination)) / (dcos(latitude) * dcos(declination))
}

fn event_time(cos_h: f64, equation_of_time: f64, is_morning: bool) -> f64 {
    let h = darccos(cos_h) / 15.0;
    let noon = 12.0 - equation_of_time;
    if is_morning {
        noon - h
    } else {
        noon + h
    }
}

/// Time (decimal hours, apparent solar time at Greenwich) at which the sun
/// crosses `angle`, clamping unreachable angles.
pub fn compute_time(
    latitude: f64,
    declination: f64,
    equation_of_time: f64,
    angle: f64,
    is_morning: bool,
) -> f64 {
    let cos_h = cos_hour_angle(latitude, declination, angle).clamp(-1.0, 1.0);
    event_time(cos_h, equation_of_time, is_morning)
}

fn try_compute_time(
    latitude: f64,
    declination: f64,
    equation_of_time: f64,
    angle: f64,
    is_morning: bool,
) -> Result<f64, Unreachable> {
    let cos_h = cos_hour_angle(latitude, declination, angle);
    if cos_h < -1.0 {
        Err(Unreachable::AlwaysAbove)
    } else if cos_h > 1.0 {
        Err(Unreachable::AlwaysBelow)
    } else {
        Ok(event_time(cos_h, equation_of_time, is_morning))
    }
}

/// Solar-depression angle at which Asr begins, in the `compute_time`
/// convention.
pub fn asr_angle(shadow_factor: f64, latitude: f64, declination: f64) -> f64 {
    -darccot(shadow_factor + dtan((latitude - declination).abs()))
}

/// Computes prayer times for a fixed set of options.
///
/// The calculator holds no mutable state and can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrayerCalculator {
    options: CalculationOptions,
}

impl PrayerCalculator {
    pub fn new(options: CalculationOptions) -> Self {
        PrayerCalculator { options }
    }

    pub fn options(&self) -> &CalculationOptions {
        &self.options
    }

    /// Prayer times for `date` at `location`, clamping unreachable angles
    /// regardless of the configured strictness.
    pub fn compute(&self, location: &GeoLocation, date: CalendarDate) -> PrayerTimeSet {
        let clamped = |lat: f64, decl: f64, eq: f64, angle: f64, morning: bool, _: Prayer| {
            Ok::<f64, Infallible>(compute_time(lat, decl, eq, angle, morning))
        };
        match self.compute_with(location, date, clamped) {
            Ok(times) => times,
            Err(never) => match never {},
        }
    }

    /// Prayer times honoring the configured [`Strictness`].
    pub fn try_compute(
        &self,
        location: &GeoLocation,
        date: CalendarDate,
    ) -> Result<PrayerTimeSet, CalcError> {
        match self.options.strictness {
            Strictness::Lenient => Ok(self.compute(location, date)),
            Strictness::Strict => {
                let checked =
                    |lat: f64, decl: f64, eq: f64, angle: f64, morning: bool, prayer: Prayer| {
                        try_compute_time(lat, decl, eq, angle, morning)
                            .map_err(|u| u.into_error(prayer))
                    };
                self.compute_with(location, date, checked)
            }
        }
    }

    fn compute_with<F, E>(
        &self,
        location: &GeoLocation,
        date: CalendarDate,
        mut time_at: F,
    ) -> Result<PrayerTimeSet, E>
    where
        F: FnMut(f64, f64, f64, f64, bool, Prayer) -> Result<f64, E>,
    {
        let params = self.options.method.params();
        let lat = location.latitude;

        let sun = sun_position(gregorian_to_julian_day(date));
        let decl = sun.declination;
        let eq = sun.equation_of_time;

        let fajr = time_at(lat, decl, eq, 180.0 - params.fajr_angle, true, Prayer::Fajr)?;
        let sunrise = time_at(lat, decl, eq, 180.0 - HORIZON_CORRECTION, true, Prayer::Sunrise)?;
        let dhuhr = 12.0 - eq;
        let asr = time_at(
            lat,
            decl,
            eq,
            asr_angle(self.options.asr.shadow_factor(), lat, decl),
            false,
            Prayer::Asr,
        )?;
        let maghrib = time_at(lat, decl, eq, HORIZON_CORRECTION, false, Prayer::Maghrib)?;
        let isha = match params.isha {
            IshaRule::MinutesAfterMaghrib(minutes) => maghrib + minutes / 60.0,
            IshaRule::Angle(angle) => time_at(lat, decl, eq, angle, false, Prayer::Isha)?,
        };

        let shift = location.timezone_offset_hours - location.longitude / 15.0;

        Ok(PrayerTimeSet {
            fajr: fajr + shift,
            sunrise: sunrise + shift,
            dhuhr: dhuhr + shift,
            asr: asr + shift,
            maghrib: maghrib + shift,
            isha: isha + shift,
        })
    }

    /// Prayer times for every day of a Gregorian month (clamped).
    ///
    /// Returns an empty timetable for a month outside 1-12.
    pub fn monthly_timetable(
        &self,
        location: &GeoLocation,
        year: i32,
        month: u32,
    ) -> Vec<DailyTimes> {
        month_days(year, month)
            .map(|date| DailyTimes {
                date,
                times: self.compute(location, date),
            })
            .collect()
    }

    /// Monthly timetable honoring the configured [`Strictness`]; fails on
    /// the first day that cannot be computed.
    pub fn try_monthly_timetable(
        &self,
        location: &GeoLocation,
        year: i32,
        month: u32,
    ) -> Result<Vec<DailyTimes>, CalcError> {
        if !(1..=12).contains(&month) {
            return Err(CalcError::InvalidDate {
                year,
                month,
                day: 1,
            });
        }
        month_days(year, month)
            .map(|date| {
                self.try_compute(location, date)
                    .map(|times| DailyTimes { date, times })
            })
            .collect()
    }
}

fn month_days(year: i32, month: u32) -> impl Iterator<Item = CalendarDate> {
    (1..=days_in_month(year, month)).map(move |day| CalendarDate::new(year, month, day))
}
