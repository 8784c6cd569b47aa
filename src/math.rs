//! Degree-based trigonometry and range reduction helpers.
//!
//! All angles handled by the solar formulas are in degrees; these wrappers
//! do the radian conversion at the boundary.

use std::f64::consts::PI;

/// Degrees to radians.
pub fn deg_to_rad(d: f64) -> f64 {
    d * PI / 180.0
}

/// Radians to degrees.
pub fn rad_to_deg(r: f64) -> f64 {
    r * 180.0 / PI
}

pub fn dsin(d: f64) -> f64 {
    deg_to_rad(d).sin()
}

pub fn dcos(d: f64) -> f64 {
    deg_to_rad(d).cos()
}

pub fn dtan(d: f64) -> f64 {
    deg_to_rad(d).tan()
}

pub fn darcsin(x: f64) -> f64 {
    rad_to_deg(x.asin())
}

pub fn darccos(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

pub fn darctan2(y: f64, x: f64) -> f64 {
    rad_to_deg(y.atan2(x))
}

/// Arc cotangent in degrees.
pub fn darccot(x: f64) -> f64 {
    rad_to_deg((1.0 / x).atan())
}

/// Integer division rounding toward negative infinity.
///
/// Rust's `/` truncates toward zero, which breaks calendar arithmetic for
/// negative operands.
pub fn floor_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b) - if b < 0 && a.rem_euclid(b) != 0 { 1 } else { 0 }
}

/// Remainder that always has the sign of a positive divisor.
pub fn modulo(a: f64, b: f64) -> f64 {
    let r = a - b * (a / b).floor();
    if r < 0.0 {
        r + b
    } else {
        r
    }
}

/// Reduce an angle into `[0, 360)`.
pub fn fix_angle(a: f64) -> f64 {
    modulo(a, 360.0)
}

/// Reduce a decimal hour into `[0, 24)`.
pub fn fix_hour(a: f64) -> f64 {
    modulo(a, 24.0)
}
