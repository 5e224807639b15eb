//! Public holiday API
//!
//! `Holidays` is the entry point for callers. It is constructed once at
//! application start and cloned into whatever needs it; every clone shares
//! the same cache and HTTP connection pool.

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use log::warn;

use crate::cache::HolidayCache;
use crate::config::HolidayConfig;
use crate::data::{Holiday, HolidayError, HolidaySource, NagerClient};
use crate::service::{normalize_country_code, HolidayService};

/// Shared handle answering holiday questions
#[derive(Debug)]
pub struct Holidays<S = NagerClient> {
    service: Arc<HolidayService<S>>,
}

impl<S> Clone for Holidays<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl Holidays<NagerClient> {
    /// Creates a handle backed by the Nager.Date API
    ///
    /// Fails only if the HTTP client cannot be constructed.
    pub fn new(config: HolidayConfig) -> Result<Self, HolidayError> {
        Ok(Self::from_service(HolidayService::from_config(&config)?))
    }
}

impl<S: HolidaySource> Holidays<S> {
    /// Creates a handle over a custom source with a default cache
    pub fn with_source(source: S) -> Self {
        Self::from_service(HolidayService::new(source, HolidayCache::new()))
    }

    pub fn from_service(service: HolidayService<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> &HolidayService<S> {
        &self.service
    }

    /// Returns true if `date` is a public holiday in `country_code`
    ///
    /// Accepts `NaiveDate`, `NaiveDateTime` or `DateTime<Tz>`; only the calendar
    /// day is compared, taken in the value's own offset. Any lookup error is
    /// logged and reported as `false`.
    pub async fn is_holiday(&self, country_code: &str, date: impl Datelike) -> bool {
        let Some(day) = NaiveDate::from_ymd_opt(date.year(), date.month(), date.day()) else {
            return false;
        };
        let country_code = normalize_country_code(country_code);

        match self.service.get_holidays(&country_code, day.year()).await {
            Ok(holidays) => holidays.iter().any(|h| h.date == day),
            Err(e) => {
                warn!("Holiday lookup for {country_code} failed, treating {day} as a working day: {e}");
                false
            }
        }
    }

    /// Returns true if today's local date is a public holiday in `country_code`
    pub async fn is_today_holiday(&self, country_code: &str) -> bool {
        self.is_holiday(country_code, Local::now().date_naive()).await
    }

    /// Lists holidays falling on today's local date, across all countries
    ///
    /// Unlike `is_holiday`, upstream errors are returned to the caller.
    pub async fn today_holiday_countries(&self) -> Result<Vec<Holiday>, HolidayError> {
        self.service.get_today_worldwide().await
    }

    /// Lists all holidays of a country for a year
    pub async fn holidays(&self, country_code: &str, year: i32) -> Result<Vec<Holiday>, HolidayError> {
        self.service.get_holidays(country_code, year).await
    }
}
