//! Path resolution and existence checks

mod stats;

pub use stats::CacheStatistics;

use crate::core::paths::EntryPath;
use crate::core::types::Cache;

impl Cache {
    /// Shard directory, entry file and hash key for `key` under this root
    pub fn resolve(&self, key: &str) -> EntryPath {
        EntryPath::resolve(&self.inner.cache_dir, key)
    }

    /// Whether an entry file exists for `key`, fresh or not
    ///
    /// Takes no lock; the answer can be stale by the time it is used.
    pub fn contains(&self, key: &str) -> bool {
        self.resolve(key).entry_file.is_file()
    }
}
