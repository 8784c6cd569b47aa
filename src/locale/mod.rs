//! Bilingual (English/Arabic) names and numeral handling.

mod builtin;

pub use builtin::{Digits, Locale};

use crate::error::CalcError;

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn locale(self) -> &'static Locale {
        match self {
            Language::En => &builtin::ENGLISH,
            Language::Ar => &builtin::ARABIC,
        }
    }
}

/// English and Arabic names of one Hijri month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthName {
    pub en: &'static str,
    pub ar: &'static str,
}

impl MonthName {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

/// Hijri month names, index 0 = Muharram.
pub const HIJRI_MONTHS: [MonthName; 12] = [
    MonthName { en: "Muharram", ar: "محرم" },
    MonthName { en: "Safar", ar: "صفر" },
    MonthName { en: "Rabi' al-Awwal", ar: "ربيع الأول" },
    MonthName { en: "Rabi' al-Thani", ar: "ربيع الآخر" },
    MonthName { en: "Jumada al-Awwal", ar: "جمادى الأولى" },
    MonthName { en: "Jumada al-Thani", ar: "جمادى الآخرة" },
    MonthName { en: "Rajab", ar: "رجب" },
    MonthName { en: "Sha'ban", ar: "شعبان" },
    MonthName { en: "Ramadan", ar: "رمضان" },
    MonthName { en: "Shawwal", ar: "شوال" },
    MonthName { en: "Dhu al-Qi'dah", ar: "ذو القعدة" },
    MonthName { en: "Dhu al-Hijjah", ar: "ذو الحجة" },
];

/// Name of a Hijri month (1-12). Returns an empty string for any other
/// month number.
pub fn month_name(month: u32, lang: Language) -> &'static str {
    try_month_name(month, lang).unwrap_or("")
}

/// Name of a Hijri month, rejecting months outside 1-12.
pub fn try_month_name(month: u32, lang: Language) -> Result<&'static str, CalcError> {
    match month {
        1..=12 => Ok(HIJRI_MONTHS[(month - 1) as usize].get(lang)),
        _ => Err(CalcError::InvalidMonth { month }),
    }
}

/// Replace ASCII digits with Arabic-Indic digits (U+0660..U+0669).
///
/// Every other character is passed through unchanged.
pub fn to_arabic_numerals(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '0'..='9' => char::from_u32(0x0660 + (c as u32 - '0' as u32)).unwrap_or(c),
            _ => c,
        })
        .collect()
}
