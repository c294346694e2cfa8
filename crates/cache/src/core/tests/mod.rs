//! Engine tests against temporary cache roots


use crate::config::CacheConfig;
use crate::core::Cache;
use tempfile::TempDir;

/// Cache rooted in a fresh temporary directory
pub(super) fn temp_cache() -> (TempDir, Cache) {
    mzcache_utils::tracing::init_for_tests();
    let temp_dir = TempDir::new().unwrap();
    let cache = Cache::new(CacheConfig::with_cache_dir(temp_dir.path())).unwrap();
    (temp_dir, cache)
}

/// Set an entry's modification time `days` days into the past
pub(super) fn age_entry(cache: &Cache, key: &str, days: u64) {
    let path = cache.resolve(key).entry_file;
    let file = std::fs::OpenOptions::new().write(true).open(path).unwrap();
    let then = std::time::SystemTime::now() - std::time::Duration::from_secs(days * 24 * 60 * 60);
    file.set_modified(then).unwrap();
}
