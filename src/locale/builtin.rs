//! Built-in locale data.

/// Digit system used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digits {
    /// ASCII 0-9
    Latin,
    /// U+0660..U+0669
    ArabicIndic,
}

/// Locale settings for formatting.
#[derive(Debug, Clone)]
pub struct Locale {
    pub am_string: &'static str,
    pub pm_string: &'static str,
    /// Suffix appended to Hijri years.
    pub era_suffix: &'static str,
    /// Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha
    pub prayer_names: [&'static str; 6],
    pub digits: Digits,
}

impl Default for Locale {
    fn default() -> Self {
        ENGLISH.clone()
    }
}

impl Locale {
    /// Render a string of ASCII digits in this locale's digit system.
    pub fn localize_digits(&self, s: &str) -> String {
        match self.digits {
            Digits::Latin => s.to_string(),
            Digits::ArabicIndic => super::to_arabic_numerals(s),
        }
    }
}

pub(crate) static ENGLISH: Locale = Locale {
    am_string: "AM",
    pm_string: "PM",
    era_suffix: "AH",
    prayer_names: ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"],
    digits: Digits::Latin,
};

pub(crate) static ARABIC: Locale = Locale {
    am_string: "ص",
    pm_string: "م",
    era_suffix: "هـ",
    prayer_names: ["الفجر", "الشروق", "الظهر", "العصر", "المغرب", "العشاء"],
    digits: Digits::ArabicIndic,
};
