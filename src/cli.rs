//! Command-line interface parsing for the holidays demo binary
//!
//! This module handles parsing of CLI arguments using clap: the `check`,
//! `today` and `list` subcommands and the global `--base-url` override.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::HolidayConfig;
use crate::data::parse_date;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The date is not in `YYYY-MM-DD` form
    #[error("Invalid date: '{0}'. Expected YYYY-MM-DD, e.g. 2024-12-25")]
    InvalidDate(String),

    /// The country code is empty or not alphabetic
    #[error("Invalid country code: '{0}'. Expected an ISO 3166-1 alpha-2 code, e.g. US")]
    InvalidCountry(String),
}

/// Public holiday lookups backed by the Nager.Date API
#[derive(Parser, Debug)]
#[command(name = "holidays")]
#[command(about = "Check public holidays by country and date")]
#[command(version)]
pub struct Cli {
    /// Base URL of the holiday API
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a date is a public holiday in a country
    ///
    /// Examples:
    ///   holidays check MD
    ///   holidays check US --date 2024-07-04
    Check {
        /// Country code, e.g. US
        #[arg(value_parser = parse_country_arg)]
        country: String,
        /// Date to check (defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
    /// List the countries that have a public holiday today
    Today,
    /// List all public holidays of a country for a year
    List {
        #[arg(value_parser = parse_country_arg)]
        country: String,
        year: i32,
    },
}

/// Parses a `YYYY-MM-DD` argument
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, CliError> {
    parse_date(s.trim()).ok_or_else(|| CliError::InvalidDate(s.to_string()))
}

/// Parses a country code argument
///
/// Only rejects obviously malformed input; unknown codes are left to the API.
pub fn parse_country_arg(s: &str) -> Result<String, CliError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CliError::InvalidCountry(s.to_string()));
    }
    Ok(trimmed.to_string())
}

impl Cli {
    /// Client configuration derived from the arguments
    pub fn config(&self) -> HolidayConfig {
        match &self.base_url {
            Some(url) => HolidayConfig::default().with_base_url(url.clone()),
            None => HolidayConfig::default(),
        }
    }
}
