//! In-memory cache for per-country holiday lists
//!
//! Provides a `HolidayCache` that maps `(country code, year)` to a holiday list
//! with an expiry timestamp, guarded by a read/write lock.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::data::Holiday;

/// Default time-to-live for cached holiday lists in hours
pub const CACHE_TTL_HOURS: i64 = 24;

/// A cached holiday list and the instant it stops being fresh
#[derive(Debug, Clone)]
struct CacheEntry {
    holidays: Vec<Holiday>,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Builds the composite cache key `CC-YEAR`
pub fn cache_key(country_code: &str, year: i32) -> String {
    format!("{}-{}", country_code, year)
}

/// Keyed, time-expiring store of holiday lists
///
/// Reads share the lock; a write holds it exclusively while the entry is
/// replaced. The lock queues fairly, so a waiting writer is not starved by
/// readers that arrive after it.
///
/// There is no eviction sweep. An expired entry stays in memory until the
/// next successful fetch for the same key overwrites it, so memory grows with
/// the number of distinct `(country, year)` pairs ever queried.
#[derive(Debug)]
pub struct HolidayCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for HolidayCache {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayCache {
    /// Creates a cache with the default 24 hour TTL
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(CACHE_TTL_HOURS))
    }

    /// Creates a cache with a custom TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns a copy of the cached list if present and not yet expired
    ///
    /// An expired entry reads as absent.
    pub async fn get(&self, country_code: &str, year: i32) -> Option<Vec<Holiday>> {
        let key = cache_key(country_code, year);
        let entries = self.entries.read().await;
        let entry = entries.get(&key)?;

        if entry.is_fresh(Utc::now()) {
            Some(entry.holidays.clone())
        } else {
            log::debug!("Cache entry {key} expired at {}", entry.expires_at);
            None
        }
    }

    /// Stores `holidays` under the key with expiry `now + ttl`, replacing any prior entry
    pub async fn put(&self, country_code: &str, year: i32, holidays: Vec<Holiday>) {
        let key = cache_key(country_code, year);
        let entry = CacheEntry {
            holidays,
            expires_at: Utc::now() + self.ttl,
        };

        self.entries.write().await.insert(key, entry);
    }

    /// Number of entries held, fresh or expired
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use std::time::Duration as StdDuration;

    fn holiday(name: &str, month: u32, day: u32) -> Holiday {
        Holiday {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
            country_code: "US".to_string(),
        }
    }

    #[test]
    fn test_cache_key_format() {
        assert_eq!(cache_key("US", 2024), "US-2024");
        assert_eq!(cache_key("MD", 1999), "MD-1999");
    }

    #[tokio::test]
    async fn test_get_returns_none_for_missing_key() {
        let cache = HolidayCache::new();
        assert!(cache.get("US", 2024).await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_then_get_returns_fresh_data() {
        let cache = HolidayCache::new();
        let holidays = vec![holiday("New Year's Day", 1, 1), holiday("Christmas Day", 12, 25)];

        cache.put("US", 2024, holidays.clone()).await;

        let result = cache.get("US", 2024).await.expect("Entry should be fresh");
        assert_eq!(result, holidays);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_keys_are_separated_by_year_and_country() {
        let cache = HolidayCache::new();
        cache.put("US", 2024, vec![holiday("A", 1, 1)]).await;

        assert!(cache.get("US", 2025).await.is_none());
        assert!(cache.get("GB", 2024).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_absent() {
        // Zero TTL: the entry is stale as soon as it is written
        let cache = HolidayCache::with_ttl(Duration::zero());
        cache.put("US", 2024, vec![holiday("A", 1, 1)]).await;

        tokio::time::sleep(StdDuration::from_millis(10)).await;

        assert!(cache.get("US", 2024).await.is_none());
        // Not evicted
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_entry() {
        let cache = HolidayCache::with_ttl(Duration::zero());
        cache.put("US", 2024, vec![holiday("first", 1, 1)]).await;

        let cache = HolidayCache {
            ttl: Duration::hours(1),
            ..cache
        };
        cache.put("US", 2024, vec![holiday("second", 2, 2)]).await;

        let result = cache.get("US", 2024).await.expect("Overwritten entry should be fresh");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "second");
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_returned_list_is_a_copy() {
        let cache = HolidayCache::new();
        cache.put("US", 2024, vec![holiday("A", 1, 1)]).await;

        let mut copy = cache.get("US", 2024).await.unwrap();
        copy.clear();

        assert_eq!(cache.get("US", 2024).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_readers_and_writers() {
        let cache = Arc::new(HolidayCache::new());
        let mut handles = Vec::new();

        for i in 0..16 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                let list = vec![holiday("A", 1, 1), holiday("B", 2, 2)];
                if i % 2 == 0 {
                    cache.put("US", 2024, list).await;
                }
                cache.get("US", 2024).await
            }));
        }

        for handle in handles {
            if let Some(list) = handle.await.expect("Task should not panic") {
                assert_eq!(list.len(), 2);
            }
        }
        assert_eq!(cache.get("US", 2024).await.map(|l| l.len()), Some(2));
    }
}
