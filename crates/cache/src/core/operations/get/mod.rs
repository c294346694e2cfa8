//! Cache read operations

mod disk;

use crate::errors::{CacheError, RecoveryHint, Result};
use crate::core::types::{Cache, Lookup};
use mzcache_utils::tracing::cache_span;
use tracing::{debug, warn};

impl Cache {
    /// Look up `key`, treating miss and expiry as ordinary outcomes
    ///
    /// An entry is fresh when its modification date is on or after
    /// `today - (days - 1)`. Expired entries are reported, not deleted.
    ///
    /// Failing to take the key lock is an error, never a miss. Failing to
    /// release it after the read completed does not change the outcome and
    /// shows up only in [`CacheStatistics::unlock_failures`].
    ///
    /// [`CacheStatistics::unlock_failures`]: crate::CacheStatistics::unlock_failures
    pub fn lookup(&self, key: &str, days: u32) -> Result<Lookup> {
        let entry = self.resolve(key);
        let span = cache_span("read", &entry.hash_key);
        let _enter = span.enter();

        // Nothing was ever written under this shard
        if !entry.shard_dir.is_dir() {
            self.inner.stats.record_miss();
            debug!("cache miss, no shard directory");
            return Ok(Lookup::Miss);
        }

        let lock = match self.inner.locks.acquire(&entry.hash_key) {
            Ok(lock) => lock,
            Err(e) => {
                self.inner.stats.record_error();
                return Err(e);
            }
        };

        let outcome = self.read_entry(&entry.entry_file, days);

        if let Err(unlock) = lock.release() {
            // A completed read stays valid; the failure is only logged
            self.inner.stats.record_unlock_failure();
            warn!(error = %unlock, "unlock failed after read");
        }

        match &outcome {
            Ok(Lookup::Hit(value)) => {
                self.inner.stats.record_hit();
                debug!(bytes = value.len(), "cache hit");
            }
            Ok(Lookup::Miss) => {
                self.inner.stats.record_miss();
                debug!("cache miss");
            }
            Ok(Lookup::Expired { path }) => {
                self.inner.stats.record_expired();
                debug!(path = %path.display(), days, "cache entry expired");
            }
            Err(e) => {
                self.inner.stats.record_error();
                debug!(error = %e, "cache read failed");
            }
        }

        outcome
    }

    /// Read the value stored under `key`
    ///
    /// Misses and expired entries come back as [`CacheError::Miss`] and
    /// [`CacheError::Expired`]; check with [`CacheError::is_miss`] and
    /// [`CacheError::is_expired`]. As with [`Cache::lookup`], an unlock
    /// failure after a completed read is not returned; it is logged and
    /// counted in [`CacheStatistics::unlock_failures`].
    ///
    /// [`CacheStatistics::unlock_failures`]: crate::CacheStatistics::unlock_failures
    pub fn read(&self, key: &str, days: u32) -> Result<String> {
        match self.lookup(key, days)? {
            Lookup::Hit(value) => Ok(value),
            Lookup::Miss => Err(CacheError::Miss {
                path: self.resolve(key).entry_file,
                recovery_hint: RecoveryHint::Recreate,
            }),
            Lookup::Expired { path } => Err(CacheError::Expired {
                path,
                recovery_hint: RecoveryHint::Recreate,
            }),
        }
    }
}
