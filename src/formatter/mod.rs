//! Text rendering for Hijri dates and decimal-hour times

mod date;
mod time;

pub use date::format_hijri_date;
pub use time::{
    format_time_12h, format_time_12h_localized, format_time_24h, time_parts, INVALID_TIME,
};
