//! Statistics snapshot

use crate::core::types::Cache;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::Ordering;

/// Point-in-time copy of the cache counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStatistics {
    pub hits: u64,
    pub misses: u64,
    pub expired: u64,
    pub writes: u64,
    pub errors: u64,
    pub unlock_failures: u64,
    pub stats_since: DateTime<Utc>,
}

impl CacheStatistics {
    /// Fraction of lookups that were hits, 0.0 when nothing was read
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses + self.expired;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

impl Cache {
    /// Snapshot the counters shared by this cache and its clones
    pub fn statistics(&self) -> CacheStatistics {
        let stats = &self.inner.stats;
        CacheStatistics {
            hits: stats.hits.load(Ordering::Relaxed),
            misses: stats.misses.load(Ordering::Relaxed),
            expired: stats.expired.load(Ordering::Relaxed),
            writes: stats.writes.load(Ordering::Relaxed),
            errors: stats.errors.load(Ordering::Relaxed),
            unlock_failures: stats.unlock_failures.load(Ordering::Relaxed),
            stats_since: stats.stats_since,
        }
    }
}
