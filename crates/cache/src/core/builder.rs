//! Cache construction

use crate::config::CacheConfig;
use crate::errors::Result;
use std::sync::Arc;

use super::internal::CacheStats;
use super::locking::LockCoordinator;
use super::types::{Cache, CacheInner};

impl Cache {
    /// Create a cache, preparing its lock directory
    ///
    /// With `config.lock_dir` set the cache attaches to that directory,
    /// otherwise a fresh process-lifetime lock directory is created under the
    /// cache root. Either failure is returned as an environment error.
    pub fn new(config: CacheConfig) -> Result<Self> {
        let locks = match &config.lock_dir {
            Some(lock_dir) => LockCoordinator::attach(lock_dir)?,
            None => LockCoordinator::initialize(&config.cache_dir)?,
        };

        Ok(Self::with_coordinator(config, Arc::new(locks)))
    }

    /// Create a cache rooted at `MZ_CACHE_DIR` or `/var/tmp/mzcache`
    pub fn from_env() -> Result<Self> {
        Self::new(CacheConfig::from_env())
    }

    /// Create a cache that takes its locks from an existing coordinator
    ///
    /// Use this for every cache in a process that should exclude the others,
    /// including caches pointed at a different root.
    pub fn with_coordinator(config: CacheConfig, locks: Arc<LockCoordinator>) -> Self {
        let inner = CacheInner {
            cache_dir: config.cache_dir.clone(),
            compression: config.compression(),
            config,
            locks,
            stats: CacheStats::default(),
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Configuration this cache was built from
    pub fn config(&self) -> &CacheConfig {
        &self.inner.config
    }

    /// Lock coordinator backing this cache
    pub fn lock_coordinator(&self) -> &Arc<LockCoordinator> {
        &self.inner.locks
    }
}
