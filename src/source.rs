//! Remote time sources with local fallback.
//!
//! Applications that trust an external authority for prayer times can plug
//! it in through [`RemoteTimeSource`]. [`FallbackTimeSource`] asks the
//! remote first, caches what it returns, and falls back to the local
//! [`PrayerCalculator`] whenever the remote is unavailable. The calculation
//! core never performs I/O itself.

use std::num::NonZeroUsize;

use log::{debug, warn};
use thiserror::Error;

use crate::cache::TimesCache;
use crate::date::CalendarDate;
use crate::location::GeoLocation;
use crate::method::CalculationMethod;
use crate::prayer::{PrayerCalculator, PrayerTimeSet};

/// The remote source could not provide times.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("remote prayer times unavailable: {reason}")]
pub struct Unavailable {
    pub reason: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Unavailable {
            reason: reason.into(),
        }
    }
}

/// An external provider of prayer times.
///
/// Implementations are expected to apply their own timeouts.
pub trait RemoteTimeSource {
    fn fetch_times(
        &self,
        location: &GeoLocation,
        date: CalendarDate,
        method: CalculationMethod,
    ) -> Result<PrayerTimeSet, Unavailable>;
}

/// Where a resolved set of times came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimesOrigin {
    Remote,
    Cache,
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTimes {
    pub times: PrayerTimeSet,
    pub origin: TimesOrigin,
}

/// Remote-first lookup with caching and a local fallback.
///
/// Only remote results are cached, so a failed fetch is retried on the
/// next request.
pub struct FallbackTimeSource<R> {
    remote: R,
    calculator: PrayerCalculator,
    cache: TimesCache,
}

impl<R: RemoteTimeSource> FallbackTimeSource<R> {
    pub fn new(remote: R, calculator: PrayerCalculator) -> Self {
        FallbackTimeSource {
            remote,
            calculator,
            cache: TimesCache::default(),
        }
    }

    pub fn with_capacity(remote: R, calculator: PrayerCalculator, capacity: NonZeroUsize) -> Self {
        FallbackTimeSource {
            remote,
            calculator,
            cache: TimesCache::new(capacity),
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn cache(&self) -> &TimesCache {
        &self.cache
    }

    /// Times for `date` at `location` using the calculator's method.
    pub fn times(&self, location: &GeoLocation, date: CalendarDate) -> ResolvedTimes {
        let method = self.calculator.options().method;

        if let Some(times) = self.cache.get(location, date, method) {
            debug!("cache hit for {} ({})", date, method);
            return ResolvedTimes {
                times,
                origin: TimesOrigin::Cache,
            };
        }
        debug!("cache miss for {} ({})", date, method);

        match self.remote.fetch_times(location, date, method) {
            Ok(times) => {
                self.cache.put(location, date, method, times);
                ResolvedTimes {
                    times,
                    origin: TimesOrigin::Remote,
                }
            }
            Err(err) => {
                warn!("{}; using local calculation for {}", err, date);
                ResolvedTimes {
                    times: self.calculator.compute(location, date),
                    origin: TimesOrigin::Local,
                }
            }
        }
    }
}
