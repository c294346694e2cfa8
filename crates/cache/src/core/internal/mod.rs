//! Internal counters for the cache engine

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

/// Internal cache statistics with atomic counters
pub struct CacheStats {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub expired: AtomicU64,
    pub writes: AtomicU64,
    pub errors: AtomicU64,
    pub unlock_failures: AtomicU64,
    pub stats_since: DateTime<Utc>,
}

impl Default for CacheStats {
    fn default() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            expired: AtomicU64::new(0),
            writes: AtomicU64::new(0),
            errors: AtomicU64::new(0),
            unlock_failures: AtomicU64::new(0),
            stats_since: Utc::now(),
        }
    }
}

impl CacheStats {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_expired(&self) {
        self.expired.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unlock_failure(&self) {
        self.unlock_failures.fetch_add(1, Ordering::Relaxed);
    }
}
