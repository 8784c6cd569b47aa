use miqat::date::{days_in_hijri_month, is_hijri_leap_year};
use miqat::hijri::{
    gregorian_to_hijri_adjusted, hijri_to_julian_day, julian_day_to_hijri, today_hijri,
};
use miqat::julian::{gregorian_to_julian_day, julian_day_to_gregorian};
use miqat::{gregorian_to_hijri, hijri_to_gregorian, CalendarDate, FixedClock, HijriDate};

#[test]
fn test_gregorian_roundtrip_through_julian_day() {
    let mut date = CalendarDate::new(1583, 1, 1);
    let end = CalendarDate::new(2200, 1, 1);
    while date < end {
        assert_eq!(julian_day_to_gregorian(gregorian_to_julian_day(date)), date);
        date = date.succ();
    }
}

#[test]
fn test_hijri_roundtrip_through_julian_day() {
    for year in 1..=1600 {
        for month in 1..=12 {
            for day in 1..=days_in_hijri_month(year, month) {
                let h = HijriDate::new(year, month, day);
                assert_eq!(julian_day_to_hijri(hijri_to_julian_day(h)), h);
            }
        }
    }
}

#[test]
fn test_gregorian_hijri_gregorian() {
    let mut date = CalendarDate::new(1900, 1, 1);
    let end = CalendarDate::new(2100, 1, 1);
    while date < end {
        assert_eq!(hijri_to_gregorian(gregorian_to_hijri(date)), date);
        date = date.succ();
    }
}

#[test]
fn test_monotonic_day_by_day() {
    let mut date = CalendarDate::new(1900, 1, 1);
    let mut prev = gregorian_to_hijri(date);
    let end = CalendarDate::new(2100, 1, 1);

    while date < end {
        date = date.succ();
        let next = gregorian_to_hijri(date);
        assert!(next > prev, "{} -> {} is not increasing", prev, next);

        if next.day == 1 {
            // month or year rollover after the last day of the month
            assert_eq!(prev.day, days_in_hijri_month(prev.year, prev.month));
        } else {
            assert_eq!((next.year, next.month, next.day), (prev.year, prev.month, prev.day + 1));
        }
        prev = next;
    }
}

#[test]
fn test_year_lengths_match_leap_rule() {
    for year in 1400..1500 {
        let start = hijri_to_julian_day(HijriDate::new(year, 1, 1));
        let next = hijri_to_julian_day(HijriDate::new(year + 1, 1, 1));
        let expected = if is_hijri_leap_year(year) { 355.0 } else { 354.0 };
        assert_eq!(next - start, expected, "year {}", year);
    }
}

#[test]
fn test_adjusted_crosses_month_boundary() {
    let first_of_ramadan = hijri_to_gregorian(HijriDate::new(1447, 9, 1));
    assert_eq!(
        gregorian_to_hijri_adjusted(first_of_ramadan, -1),
        HijriDate::new(1447, 8, 29)
    );
    assert_eq!(
        gregorian_to_hijri_adjusted(first_of_ramadan, 30),
        HijriDate::new(1447, 10, 1)
    );
}

#[test]
fn test_today_is_deterministic_with_fixed_clock() {
    let clock = FixedClock::new(CalendarDate::new(2026, 2, 12));
    assert_eq!(today_hijri(&clock), HijriDate::new(1447, 8, 24));
}
