//! Cache of remotely fetched prayer times.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::date::CalendarDate;
use crate::location::GeoLocation;
use crate::method::CalculationMethod;
use crate::prayer::PrayerTimeSet;

pub(crate) const DEFAULT_CAPACITY: usize = 100;

/// Cache key. Coordinates are compared bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    latitude: u64,
    longitude: u64,
    timezone: u64,
    date: CalendarDate,
    method: CalculationMethod,
}

impl CacheKey {
    fn new(location: &GeoLocation, date: CalendarDate, method: CalculationMethod) -> Self {
        CacheKey {
            latitude: location.latitude.to_bits(),
            longitude: location.longitude.to_bits(),
            timezone: location.timezone_offset_hours.to_bits(),
            date,
            method,
        }
    }
}

/// Thread-safe LRU cache of prayer time sets keyed by
/// `(location, date, method)`.
pub struct TimesCache {
    inner: Mutex<LruCache<CacheKey, PrayerTimeSet>>,
}

impl TimesCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        TimesCache {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(
        &self,
        location: &GeoLocation,
        date: CalendarDate,
        method: CalculationMethod,
    ) -> Option<PrayerTimeSet> {
        let mut cache = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        cache.get(&CacheKey::new(location, date, method)).copied()
    }

    pub fn put(
        &self,
        location: &GeoLocation,
        date: CalendarDate,
        method: CalculationMethod,
        times: PrayerTimeSet,
    ) {
        let mut cache = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        cache.put(CacheKey::new(location, date, method), times);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TimesCache {
    fn default() -> Self {
        TimesCache::new(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(offset: f64) -> PrayerTimeSet {
        PrayerTimeSet {
            fajr: 5.0 + offset,
            sunrise: 6.5 + offset,
            dhuhr: 13.0 + offset,
            asr: 17.0 + offset,
            maghrib: 20.0 + offset,
            isha: 21.5 + offset,
        }
    }

    #[test]
    fn test_put_get() {
        let cache = TimesCache::default();
        let loc = GeoLocation::new(-36.8485, 174.7633, 13.0);
        let date = CalendarDate::new(2026, 2, 12);

        assert!(cache.get(&loc, date, CalculationMethod::Mwl).is_none());
        cache.put(&loc, date, CalculationMethod::Mwl, sample(0.0));
        assert_eq!(cache.get(&loc, date, CalculationMethod::Mwl), Some(sample(0.0)));
        // different method is a different key
        assert!(cache.get(&loc, date, CalculationMethod::Isna).is_none());
        // so is a different timezone
        assert!(cache.get(&loc.with_timezone(12.0), date, CalculationMethod::Mwl).is_none());
    }

    #[test]
    fn test_evicts_least_recent() {
        let cache = TimesCache::new(NonZeroUsize::new(2).unwrap());
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        for day in 1..=3 {
            cache.put(&loc, CalendarDate::new(2026, 1, day), CalculationMethod::Mwl, sample(0.0));
        }
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&loc, CalendarDate::new(2026, 1, 1), CalculationMethod::Mwl).is_none());
        assert!(cache.get(&loc, CalendarDate::new(2026, 1, 3), CalculationMethod::Mwl).is_some());
    }
}
