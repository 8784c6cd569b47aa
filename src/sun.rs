//! Low-precision solar position.
//!
//! Mean-element formulas good to about a minute of time for dates within a
//! few centuries of J2000, which is all prayer times need.

use crate::math::{darcsin, darctan2, dcos, dsin, fix_angle, fix_hour};

/// J2000.0 epoch as a Julian date.
const J2000: f64 = 2451545.0;

/// Sun declination and equation of time for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Degrees.
    pub declination: f64,
    /// Hours, in `(-12, 12]`. Positive when the apparent sun runs ahead
    /// of the mean sun; solar noon falls at `12 - equation_of_time`.
    pub equation_of_time: f64,
}

/// Solar position at Julian date `jd`.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000;

    let g = fix_angle(357.529 + 0.98560028 * d);
    let q = fix_angle(280.459 + 0.98564736 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));
    let e = 23.439 - 0.00000036 * d;

    let declination = darcsin(dsin(e) * dsin(l));
    let ra = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);

    let mut equation_of_time = q / 15.0 - ra;
    if equation_of_time > 12.0 {
        equation_of_time -= 24.0;
    } else if equation_of_time <= -12.0 {
        equation_of_time += 24.0;
    }

    SunPosition {
        declination,
        equation_of_time,
    }
}
