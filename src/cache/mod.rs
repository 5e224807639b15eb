//! Cache module for holiday lists
//!
//! This module provides an in-memory cache keyed by country code and year with
//! a fixed TTL. Entries live for the lifetime of the owning service; nothing is
//! persisted across restarts.

mod manager;

pub use manager::{cache_key, HolidayCache, CACHE_TTL_HOURS};
