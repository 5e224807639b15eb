//! Core data models for holiday lookups
//!
//! Contains the domain `Holiday` type and the mapping from upstream wire
//! records into it.

pub mod nager;

pub use nager::{HolidayError, HolidaySource, NagerClient, RawHolidayRecord};

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the upstream API and for date comparisons
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A public holiday in a specific country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// English name of the holiday
    pub name: String,
    /// Calendar date, no time-of-day component
    pub date: NaiveDate,
    /// Country code as reported by the upstream source
    pub country_code: String,
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.date.format(DATE_FORMAT),
            self.name,
            self.country_code
        )
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT).ok()
}

/// Map raw upstream records into holidays, dropping records whose date does not parse
pub fn map_records(records: Vec<RawHolidayRecord>) -> Vec<Holiday> {
    let total = records.len();
    let holidays: Vec<Holiday> = records
        .into_iter()
        .filter_map(RawHolidayRecord::into_holiday)
        .collect();

    if holidays.len() < total {
        log::debug!(
            "Dropped {} record(s) with unparseable dates",
            total - holidays.len()
        );
    }

    holidays
}

/// Keep only the holidays falling on `date`
pub fn holidays_on(holidays: Vec<Holiday>, date: NaiveDate) -> Vec<Holiday> {
    holidays.into_iter().filter(|h| h.date == date).collect()
}
