//! Hijri date formatting

use crate::locale::{month_name, Language};

/// Format a Hijri date for display.
///
/// - English: `"{day} {month name} {year} AH"`
/// - Arabic: the same layout with Arabic-Indic digits and the `هـ` suffix
///
/// An out-of-range month renders with an empty name rather than failing.
pub fn format_hijri_date(day: u32, month: u32, year: i32, lang: Language) -> String {
    let locale = lang.locale();
    let name = month_name(month, lang);

    format!(
        "{} {} {} {}",
        locale.localize_digits(&day.to_string()),
        name,
        locale.localize_digits(&year.to_string()),
        locale.era_suffix
    )
}
