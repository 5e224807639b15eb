//! Holiday service
//!
//! Coordinates the cache and the upstream source: per-country/year lists are
//! served from the cache when fresh and fetched otherwise, while the worldwide
//! "today" list is always fetched.

use chrono::{Local, NaiveDate};
use log::debug;

use crate::cache::HolidayCache;
use crate::config::HolidayConfig;
use crate::data::{holidays_on, map_records, Holiday, HolidayError, HolidaySource, NagerClient};

/// Trim whitespace and upper-case a country code
pub fn normalize_country_code(country_code: &str) -> String {
    country_code.trim().to_uppercase()
}

/// Cache-or-fetch coordinator over a `HolidaySource`
#[derive(Debug)]
pub struct HolidayService<S = NagerClient> {
    source: S,
    cache: HolidayCache,
}

impl HolidayService<NagerClient> {
    /// Creates a service backed by the Nager.Date API
    pub fn from_config(config: &HolidayConfig) -> Result<Self, HolidayError> {
        let source = NagerClient::new(config)?;
        Ok(Self::new(source, HolidayCache::with_ttl(config.cache_ttl)))
    }
}

impl<S: HolidaySource> HolidayService<S> {
    pub fn new(source: S, cache: HolidayCache) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &HolidayCache {
        &self.cache
    }

    /// Returns all holidays for a country and year
    ///
    /// Served from the cache when a fresh entry exists. On a miss the list is
    /// fetched, stored under the normalized key and returned. Upstream errors
    /// are returned unchanged and nothing is cached.
    ///
    /// Concurrent callers on a cold key may each fetch; the last write wins.
    pub async fn get_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<Holiday>, HolidayError> {
        let country_code = normalize_country_code(country_code);

        if let Some(holidays) = self.cache.get(&country_code, year).await {
            debug!("Cache hit for {country_code}-{year}");
            return Ok(holidays);
        }
        debug!("Cache miss for {country_code}-{year}");

        let records = self.source.fetch_country_year(&country_code, year).await?;
        let holidays = map_records(records);

        self.cache.put(&country_code, year, holidays.clone()).await;

        Ok(holidays)
    }

    /// Returns the holidays falling on the current local date, worldwide
    ///
    /// Never cached: a cached "today" list would go stale at midnight.
    pub async fn get_today_worldwide(&self) -> Result<Vec<Holiday>, HolidayError> {
        self.get_worldwide_on(Local::now().date_naive()).await
    }

    /// Fetches upcoming holidays worldwide and keeps those on `date`
    pub async fn get_worldwide_on(&self, date: NaiveDate) -> Result<Vec<Holiday>, HolidayError> {
        let records = self.source.fetch_today_worldwide().await?;
        Ok(holidays_on(map_records(records), date))
    }
}
