//! Cache write operation

mod disk;

use crate::errors::{CacheError, RecoveryHint, Result};
use mzcache_utils::paths::ensure_dir_exists;
use mzcache_utils::tracing::cache_span;
use tracing::{debug, warn};

use crate::core::types::Cache;

impl Cache {
    /// Store `value` under `key`, replacing any previous entry
    ///
    /// The value is gzip-compressed into the entry file and synced to disk
    /// before the key lock is released. Empty values are rejected before the
    /// filesystem is touched.
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(CacheError::EmptyValue {
                key: key.to_string(),
                recovery_hint: RecoveryHint::Manual {
                    instructions: "Pass a non-empty value; empty output is usually an upstream error"
                        .to_string(),
                },
            });
        }

        let entry = self.resolve(key);
        let span = cache_span("write", &entry.hash_key);
        let _enter = span.enter();

        match ensure_dir_exists(&entry.shard_dir) {
            Ok(created) => {
                if created {
                    debug!(path = %entry.shard_dir.display(), "created shard directory");
                }
            }
            Err(e) => {
                self.inner.stats.record_error();
                return Err(CacheError::CreateDirectory {
                    path: entry.shard_dir.clone(),
                    source: e,
                    recovery_hint: RecoveryHint::CheckPermissions {
                        path: entry.shard_dir,
                    },
                });
            }
        }

        let lock = match self.inner.locks.acquire(&entry.hash_key) {
            Ok(lock) => lock,
            Err(e) => {
                self.inner.stats.record_error();
                return Err(e);
            }
        };

        let written = self.write_entry(&entry.entry_file, value.as_bytes());
        let released = lock.release();

        match (written, released) {
            (Ok(()), Ok(())) => {
                self.inner.stats.record_write();
                debug!(path = %entry.entry_file.display(), bytes = value.len(), "wrote cache entry");
                Ok(())
            }
            (Ok(()), Err(unlock)) => {
                // The entry is already durable; report the unlock failure anyway
                self.inner.stats.record_write();
                self.inner.stats.record_unlock_failure();
                warn!(error = %unlock, "cache entry written but unlock failed");
                Err(unlock)
            }
            (Err(e), released) => {
                self.inner.stats.record_error();
                if let Err(unlock) = released {
                    self.inner.stats.record_unlock_failure();
                    warn!(error = %unlock, "unlock failed after failed write");
                }
                Err(e)
            }
        }
    }
}
