use miqat::location::CITIES;
use miqat::prayer::FormattedTime;
use miqat::sun::sun_position;
use miqat::{
    get_prayer_times, AsrConvention, CalcError, CalculationMethod, CalculationOptions,
    CalendarDate, GeoLocation, Language, Prayer, PrayerCalculator,
};

const AUCKLAND: GeoLocation = GeoLocation::new(-36.8485, 174.7633, 12.0);

#[test]
fn test_auckland_summer_scenario() {
    let times = get_prayer_times(
        &AUCKLAND,
        CalendarDate::new(2026, 2, 12),
        CalculationMethod::Mwl,
        AsrConvention::Standard,
        13.0,
    );

    assert!(times.is_ordered());
    assert!(times.fajr >= 4.0 && times.fajr < 6.0, "fajr = {}", times.fajr);
    assert!(times.isha >= 21.0 && times.isha < 23.0, "isha = {}", times.isha);

    let expected = [
        (Prayer::Fajr, "05:13", "5:13 AM"),
        (Prayer::Sunrise, "06:48", "6:48 AM"),
        (Prayer::Dhuhr, "13:35", "1:35 PM"),
        (Prayer::Asr, "17:20", "5:20 PM"),
        (Prayer::Maghrib, "20:22", "8:22 PM"),
        (Prayer::Isha, "21:51", "9:51 PM"),
    ];
    for (prayer, h24, h12) in expected {
        assert_eq!(
            times.formatted(prayer),
            FormattedTime {
                twelve_hour: h12.to_string(),
                twenty_four_hour: h24.to_string(),
            },
            "{}",
            prayer
        );
    }
}

#[test]
fn test_london_winter() {
    let london = GeoLocation::new(51.5074, -0.1278, 0.0);
    let times = PrayerCalculator::default().compute(&london, CalendarDate::new(2026, 12, 21));

    let rendered: Vec<String> = times
        .iter()
        .map(|(p, _)| times.formatted(p).twenty_four_hour)
        .collect();
    assert_eq!(rendered, ["05:59", "08:04", "11:58", "13:37", "15:53", "17:51"]);
}

#[test]
fn test_cairo_egyptian_method() {
    let cairo = GeoLocation::new(30.0444, 31.2357, 2.0);
    let calc = PrayerCalculator::new(CalculationOptions::default().with_method(CalculationMethod::Egypt));
    let times = calc.compute(&cairo, CalendarDate::new(2026, 3, 20));

    let rendered: Vec<String> = times
        .iter()
        .map(|(p, _)| times.formatted(p).twenty_four_hour)
        .collect();
    assert_eq!(rendered, ["04:33", "05:59", "12:03", "15:30", "18:06", "19:23"]);
}

#[test]
fn test_ordering_for_mid_latitude_cities() {
    for city in CITIES.iter().filter(|c| c.location.latitude.abs() < 45.0) {
        for month in 1..=12 {
            for method in CalculationMethod::ALL {
                for asr in [AsrConvention::Standard, AsrConvention::Hanafi] {
                    let times = get_prayer_times(
                        &city.location,
                        CalendarDate::new(2026, month, 15),
                        method,
                        asr,
                        city.location.timezone_offset_hours,
                    );
                    assert!(
                        times.is_ordered(),
                        "{} {}-15 {} {:?}: {:?}",
                        city.name,
                        month,
                        method,
                        asr,
                        times
                    );
                }
            }
        }
    }
}

#[test]
fn test_dhuhr_is_solar_noon() {
    for city in CITIES.iter() {
        let mut date = CalendarDate::new(2026, 1, 1);
        while date.year == 2026 {
            let times = PrayerCalculator::default().compute(&city.location, date);
            let mean_noon = 12.0 + city.location.timezone_offset_hours - city.location.longitude / 15.0;
            // the equation of time never exceeds about 16.5 minutes
            assert!(
                (times.dhuhr - mean_noon).abs() < 17.0 / 60.0,
                "{} {}",
                city.name,
                date
            );
            date = date.succ();
        }
    }
}

#[test]
fn test_dhuhr_matches_equation_of_time() {
    let date = CalendarDate::new(2026, 2, 12);
    let times = PrayerCalculator::default().compute(&AUCKLAND, date);
    let sun = sun_position(miqat::julian::gregorian_to_julian_day(date));
    let expected = 12.0 - sun.equation_of_time - AUCKLAND.longitude / 15.0 + 12.0;
    assert!((times.dhuhr - expected).abs() < 1e-9);
}

#[test]
fn test_hanafi_asr_is_later() {
    for month in 1..=12 {
        let date = CalendarDate::new(2026, month, 1);
        let standard = get_prayer_times(&AUCKLAND, date, CalculationMethod::Mwl, AsrConvention::Standard, 12.0);
        let hanafi = get_prayer_times(&AUCKLAND, date, CalculationMethod::Mwl, AsrConvention::Hanafi, 12.0);
        assert!(hanafi.asr > standard.asr, "month {}", month);
    }
}

#[test]
fn test_larger_fajr_angle_is_earlier() {
    let date = CalendarDate::new(2026, 2, 12);
    let mwl = get_prayer_times(&AUCKLAND, date, CalculationMethod::Mwl, AsrConvention::Standard, 13.0);
    let isna = get_prayer_times(&AUCKLAND, date, CalculationMethod::Isna, AsrConvention::Standard, 13.0);
    assert!(mwl.fajr < isna.fajr);
    assert!(mwl.isha > isna.isha);
}

#[test]
fn test_timezone_shifts_every_time() {
    let date = CalendarDate::new(2026, 2, 12);
    let nzst = get_prayer_times(&AUCKLAND, date, CalculationMethod::Mwl, AsrConvention::Standard, 12.0);
    let nzdt = get_prayer_times(&AUCKLAND, date, CalculationMethod::Mwl, AsrConvention::Standard, 13.0);
    for prayer in Prayer::ALL {
        assert!((nzdt.get(prayer) - nzst.get(prayer) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_strict_polar_night() {
    let svalbard = GeoLocation::new(78.2232, 15.6267, 1.0);
    let calc = PrayerCalculator::new(CalculationOptions::default().strict());
    assert_eq!(
        calc.try_compute(&svalbard, CalendarDate::new(2026, 12, 21)),
        Err(CalcError::PerpetualDarkness {
            prayer: Prayer::Sunrise
        })
    );
}

#[test]
fn test_strict_mid_latitude_matches_lenient() {
    let date = CalendarDate::new(2026, 2, 12);
    let strict = PrayerCalculator::new(CalculationOptions::default().strict())
        .try_compute(&AUCKLAND, date)
        .unwrap();
    let lenient = PrayerCalculator::default().compute(&AUCKLAND, date);
    assert_eq!(strict, lenient);
}

#[test]
fn test_arabic_rendering() {
    let times = get_prayer_times(
        &AUCKLAND,
        CalendarDate::new(2026, 2, 12),
        CalculationMethod::Mwl,
        AsrConvention::Standard,
        13.0,
    );
    assert_eq!(times.format_localized(Prayer::Maghrib, Language::Ar), "٨:٢٢ م");
    assert_eq!(times.format_localized(Prayer::Fajr, Language::En), "5:13 AM");
}

#[test]
fn test_calculator_is_shareable_across_threads() {
    let calc = PrayerCalculator::default();
    let handles: Vec<_> = (1..=4)
        .map(|day| {
            std::thread::spawn(move || calc.compute(&AUCKLAND, CalendarDate::new(2026, 2, day)))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ordered());
    }
}
