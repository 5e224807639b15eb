//! Public holiday lookups
//!
//! Answers "is this date a public holiday in this country" and "which
//! countries have a holiday today" using the Nager.Date API, with an in-memory
//! cache of per-country annual holiday lists.
//!
//! ```no_run
//! use holidays::{HolidayConfig, Holidays};
//!
//! # async fn run() -> Result<(), holidays::HolidayError> {
//! let holidays = Holidays::new(HolidayConfig::default())?;
//! if holidays.is_today_holiday("MD").await {
//!     println!("Day off");
//! }
//! for holiday in holidays.today_holiday_countries().await? {
//!     println!("{holiday}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod service;

pub use api::Holidays;
pub use config::HolidayConfig;
pub use data::{Holiday, HolidayError, HolidaySource, NagerClient, RawHolidayRecord};
pub use service::HolidayService;
