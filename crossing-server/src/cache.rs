//! Daily freshness cache for computed closure results.
//!
//! The front end polls frequently but the upstream schedule only
//! changes day to day, so one cached result per calendar date is
//! enough to bound upstream calls to roughly once per TTL window. The
//! cache holds a single slot which `put` replaces wholesale; expiry is
//! detected lazily on `get`, never proactively.
//!
//! `get` and `put` take the current instant as a parameter, so the
//! caller owns the clock and tests can drive time deterministically.
//!
//! There is no request coalescing: two requests that both observe a
//! miss will both trigger an upstream fetch, and the later `put` wins.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::Mutex;

use crate::closures::ClosureResult;

/// Default TTL: 6 hours.
const DEFAULT_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Configuration for the daily cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a cached result remains fresh.
    pub ttl: Duration,
}

impl CacheConfig {
    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
    }
}

/// The filled state of the slot. Replaced as a whole on every `put`.
#[derive(Debug)]
struct CacheEntry {
    date: NaiveDate,
    generated_at: DateTime<Utc>,
    result: Arc<ClosureResult>,
}

/// Single-slot cache of the latest computed closure result.
#[derive(Debug)]
pub struct DailyCache {
    slot: Mutex<Option<CacheEntry>>,
    ttl: chrono::Duration,
}

impl DailyCache {
    /// Create an empty cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl: chrono::Duration::from_std(config.ttl).unwrap_or(chrono::Duration::MAX),
        }
    }

    /// Return the cached result if it was computed for `today` and is
    /// younger than the TTL at `now`. A stale or wrong-date entry
    /// returns `None` without clearing the slot.
    pub async fn get(&self, today: NaiveDate, now: DateTime<Utc>) -> Option<Arc<ClosureResult>> {
        let slot = self.slot.lock().await;
        let entry = slot.as_ref()?;

        if entry.date != today {
            return None;
        }
        if now.signed_duration_since(entry.generated_at) >= self.ttl {
            return None;
        }

        Some(Arc::clone(&entry.result))
    }

    /// Store a result, unconditionally overwriting whatever the slot
    /// held before. The caller is the sole decider of when to refresh.
    pub async fn put(
        &self,
        date: NaiveDate,
        result: Arc<ClosureResult>,
        generated_at: DateTime<Utc>,
    ) {
        let mut slot = self.slot.lock().await;
        *slot = Some(CacheEntry {
            date,
            generated_at,
            result,
        });
    }
}
