//! Postal-code keyed weather cache
//!
//! Bounded in-memory store with a time-to-live counted from insertion.
//! Reads never extend an entry's lifetime, and expired entries are never
//! returned even before moka's background maintenance evicts them.

use std::{fmt, time::Duration};

use domain::Weather;
use moka::future::Cache;
use tracing::debug;

/// Longest time-to-live the cache accepts; larger values are capped
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Weather snapshots keyed by postal code
#[derive(Clone)]
pub struct WeatherCache {
    cache: Cache<String, Weather>,
}

impl fmt::Debug for WeatherCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl WeatherCache {
    /// Create a cache holding at most `capacity` entries for `ttl` each
    ///
    /// `ttl` is capped at [`MAX_CACHE_TTL`].
    #[must_use]
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl.min(MAX_CACHE_TTL))
            .build();
        Self { cache }
    }

    /// Look up the snapshot stored for `zip_code`
    pub async fn get(&self, zip_code: &str) -> Option<Weather> {
        self.cache.get(zip_code).await
    }

    /// Store `weather` under `zip_code`, replacing any existing entry
    ///
    /// Stored entries are always marked fresh; the cache-hit flag is applied
    /// to the copy handed out on read.
    pub async fn put(&self, zip_code: impl Into<String>, mut weather: Weather) {
        weather.from_cache = false;
        let zip_code = zip_code.into();
        debug!(%zip_code, "Caching weather snapshot");
        self.cache.insert(zip_code, weather).await;
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// Number of live entries after pending maintenance has run
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
