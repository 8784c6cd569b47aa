//! Decimal-hour time formatting

use crate::locale::Language;
use crate::math::fix_hour;

/// Placeholder shown for a time that could not be computed.
pub const INVALID_TIME: &str = "-----";

/// Split a decimal hour into `(hour, minute)` on a 24-hour clock.
///
/// The value is first wrapped into `[0, 24)`. Minutes are rounded, and a
/// rounded 60 carries into the hour, so 5.999 becomes 06:00 and 23.999
/// becomes 00:00. Returns `None` for NaN or infinite input.
pub fn time_parts(time: f64) -> Option<(u32, u32)> {
    if !time.is_finite() {
        return None;
    }

    let time = fix_hour(time);
    let mut hours = time.floor() as u32;
    let mut minutes = ((time - hours as f64) * 60.0).round() as u32;

    if minutes >= 60 {
        minutes -= 60;
        hours += 1;
    }

    Some((hours % 24, minutes))
}

/// Format as `HH:MM` (24-hour).
pub fn format_time_24h(time: f64) -> String {
    match time_parts(time) {
        Some((h, m)) => format!("{:02}:{:02}", h, m),
        None => INVALID_TIME.to_string(),
    }
}

/// Format as `H:MM AM` / `H:MM PM` (12-hour).
pub fn format_time_12h(time: f64) -> String {
    format_time_12h_localized(time, Language::En)
}

/// Format as a 12-hour time in the given language.
///
/// Arabic output uses Arabic-Indic digits with `ص` / `م` markers.
pub fn format_time_12h_localized(time: f64, lang: Language) -> String {
    let Some((hour, minute)) = time_parts(time) else {
        return INVALID_TIME.to_string();
    };

    let locale = lang.locale();
    let marker = if hour >= 12 {
        locale.pm_string
    } else {
        locale.am_string
    };
    let clock = format!("{}:{:02}", to_12_hour(hour), minute);

    format!("{} {}", locale.localize_digits(&clock), marker)
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}
