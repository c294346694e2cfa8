//! Core cache types and structures

use crate::config::CacheConfig;
use flate2::Compression;
use std::path::PathBuf;
use std::sync::Arc;

use super::internal::CacheStats;
use super::locking::LockCoordinator;

/// Filesystem cache of gzip-compressed string values
///
/// Cloning is cheap and clones share statistics and the lock coordinator.
#[derive(Clone)]
pub struct Cache {
    pub(super) inner: Arc<CacheInner>,
}

pub(super) struct CacheInner {
    /// Configuration
    pub config: CacheConfig,
    /// Root of the sharded entry tree
    pub cache_dir: PathBuf,
    /// Per-key lock provider, possibly shared with other caches
    pub locks: Arc<LockCoordinator>,
    /// Gzip level for writes
    pub compression: Compression,
    /// Statistics
    pub stats: CacheStats,
}

/// Outcome of a lookup that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The entry exists, is fresh, and decoded cleanly
    Hit(String),
    /// No entry for the key
    Miss,
    /// The entry is older than the freshness window; it is left on disk
    Expired { path: PathBuf },
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("cache_dir", &self.inner.cache_dir)
            .field("lock_dir", &self.inner.locks.lock_dir())
            .field("compression", &self.inner.compression.level())
            .finish()
    }
}
