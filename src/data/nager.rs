//! Nager.Date API client
//!
//! This module provides the upstream gateway: it builds endpoint URLs, issues a
//! single bounded-timeout GET per call and decodes the JSON array response into
//! raw holiday records. No caching happens here.

use std::future::Future;

use log::{debug, info, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use super::{parse_date, Holiday};
use crate::config::HolidayConfig;

/// Errors that can occur when fetching holiday data
#[derive(Debug, Error)]
pub enum HolidayError {
    /// Network failure, timeout or client construction failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Nager: unexpected status {status} from {url}")]
    UpstreamStatus { status: u16, url: String },

    /// Response body was not a JSON array of holiday records
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A holiday record as returned by the upstream API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHolidayRecord {
    /// Date in `YYYY-MM-DD` format
    pub date: String,
    pub name: String,
    pub country_code: String,
}

impl RawHolidayRecord {
    /// Convert into a `Holiday`, or `None` if the date does not parse
    pub fn into_holiday(self) -> Option<Holiday> {
        let date = parse_date(&self.date)?;
        Some(Holiday {
            name: self.name,
            date,
            country_code: self.country_code,
        })
    }
}

/// Source of raw holiday records
///
/// This is the only I/O seam of the crate. `NagerClient` is the production
/// implementation; tests substitute in-memory fakes.
pub trait HolidaySource: Send + Sync {
    /// Fetch the full holiday list for one country and year
    fn fetch_country_year(
        &self,
        country_code: &str,
        year: i32,
    ) -> impl Future<Output = Result<Vec<RawHolidayRecord>, HolidayError>> + Send;

    /// Fetch upcoming holidays worldwide
    fn fetch_today_worldwide(
        &self,
    ) -> impl Future<Output = Result<Vec<RawHolidayRecord>, HolidayError>> + Send;
}

/// Client for fetching holiday data from the Nager.Date API
#[derive(Debug, Clone)]
pub struct NagerClient {
    client: Client,
    base_url: String,
}

impl NagerClient {
    /// Create a client whose requests are bounded by `config.request_timeout`
    pub fn new(config: &HolidayConfig) -> Result<Self, HolidayError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Create a client around an existing HTTP client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Join path segments onto the base URL
    ///
    /// Segments are percent-encoded. If the base URL cannot carry a path, the
    /// bare base URL is returned and the request goes there instead.
    fn endpoint(&self, segments: &[&str]) -> String {
        match join_segments(&self.base_url, segments) {
            Some(url) => url,
            None => {
                warn!(
                    "Could not join {:?} onto {}, using base URL",
                    segments, self.base_url
                );
                self.base_url.clone()
            }
        }
    }

    /// GET `url` and decode the JSON body into `T`
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, HolidayError> {
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HolidayError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl HolidaySource for NagerClient {
    async fn fetch_country_year(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<RawHolidayRecord>, HolidayError> {
        let year = year.to_string();
        let url = self.endpoint(&["PublicHolidays", &year, country_code]);
        info!("Fetching holidays for {country_code} {year}");
        self.get_json(&url).await
    }

    async fn fetch_today_worldwide(&self) -> Result<Vec<RawHolidayRecord>, HolidayError> {
        let url = self.endpoint(&["NextPublicHolidaysWorldwide"]);
        info!("Fetching upcoming holidays worldwide");
        self.get_json(&url).await
    }
}

fn join_segments(base: &str, segments: &[&str]) -> Option<String> {
    let mut url = Url::parse(base).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(segments);
    Some(url.into())
}
