//! Observer locations.

/// A point on Earth plus the civil timezone offset used for output times.
///
/// Values are not validated. Latitudes outside `[-90, 90]` or longitudes
/// outside `[-180, 180]` produce meaningless times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Degrees, positive north.
    pub latitude: f64,
    /// Degrees, positive east.
    pub longitude: f64,
    /// Hours east of UTC, e.g. `13.0` for NZDT.
    pub timezone_offset_hours: f64,
}

impl GeoLocation {
    pub const fn new(latitude: f64, longitude: f64, timezone_offset_hours: f64) -> Self {
        GeoLocation {
            latitude,
            longitude,
            timezone_offset_hours,
        }
    }

    /// Same coordinates with a different timezone offset, e.g. to apply
    /// daylight saving.
    pub const fn with_timezone(self, timezone_offset_hours: f64) -> Self {
        GeoLocation {
            timezone_offset_hours,
            ..self
        }
    }
}

/// A named location from the built-in city table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub location: GeoLocation,
}

/// Built-in cities with their standard-time offsets (no daylight saving).
pub const CITIES: [City; 12] = [
    City { name: "Auckland", location: GeoLocation::new(-36.8485, 174.7633, 12.0) },
    City { name: "Wellington", location: GeoLocation::new(-41.2865, 174.7762, 12.0) },
    City { name: "Christchurch", location: GeoLocation::new(-43.5321, 172.6362, 12.0) },
    City { name: "Hamilton", location: GeoLocation::new(-37.7870, 175.2793, 12.0) },
    City { name: "Makkah", location: GeoLocation::new(21.4225, 39.8262, 3.0) },
    City { name: "Madinah", location: GeoLocation::new(24.4686, 39.6142, 3.0) },
    City { name: "Cairo", location: GeoLocation::new(30.0444, 31.2357, 2.0) },
    City { name: "Istanbul", location: GeoLocation::new(41.0082, 28.9784, 3.0) },
    City { name: "London", location: GeoLocation::new(51.5074, -0.1278, 0.0) },
    City { name: "Jakarta", location: GeoLocation::new(-6.2088, 106.8456, 7.0) },
    City { name: "Kuala Lumpur", location: GeoLocation::new(3.1390, 101.6869, 8.0) },
    City { name: "Karachi", location: GeoLocation::new(24.8607, 67.0011, 5.0) },
];

/// Find a built-in city by name, ignoring ASCII case.
pub fn find_city(name: &str) -> Option<&'static City> {
    CITIES
        .iter()
        .find(|city| city.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_city() {
        let city = find_city("auckland").unwrap();
        assert_eq!(city.location.latitude, -36.8485);
        assert_eq!(city.location.timezone_offset_hours, 12.0);
        assert!(find_city(" Kuala Lumpur ").is_some());
        assert!(find_city("Atlantis").is_none());
    }

    #[test]
    fn test_with_timezone() {
        let nzdt = CITIES[0].location.with_timezone(13.0);
        assert_eq!(nzdt.timezone_offset_hours, 13.0);
        assert_eq!(nzdt.longitude, 174.7633);
    }
}
