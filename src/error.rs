//! Error types for strict conversions and calculations.

use thiserror::Error;

use crate::prayer::Prayer;

/// Errors returned by the strict variants of lookups and calculations.
///
/// The lenient entry points never produce these; they fall back to a
/// documented default instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("unknown calculation method '{id}'")]
    UnknownMethod { id: String },

    #[error("unknown Asr convention '{id}'")]
    UnknownAsrConvention { id: String },

    #[error("unknown conversion direction '{id}' (expected g2h or h2g)")]
    UnknownDirection { id: String },

    #[error("invalid Hijri month {month} (expected 1-12)")]
    InvalidMonth { month: u32 },

    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("sun stays above the {prayer} angle all day")]
    PerpetualDaylight { prayer: Prayer },

    #[error("sun never reaches the {prayer} angle")]
    PerpetualDarkness { prayer: Prayer },
}
