//! Cache configuration
//!
//! The environment is consulted once, by [`CacheConfig::from_env`]. Everything
//! downstream receives the resolved value.

use flate2::Compression;
use mzcache_utils::paths::{resolve_cache_dir_with, CACHE_DIR_ENV, DEFAULT_CACHE_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Gzip level used when none is configured
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Configuration for a [`crate::Cache`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Root of the sharded entry tree
    pub cache_dir: PathBuf,
    /// Existing lock directory to share with other processes. When unset a
    /// fresh process-lifetime lock directory is created under `cache_dir`.
    pub lock_dir: Option<PathBuf>,
    /// Gzip level, 0 (store) to 9 (best)
    pub compression_level: u32,
    /// Where `cache_dir` came from
    pub source: ConfigSource,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            lock_dir: None,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            source: ConfigSource::Default,
        }
    }
}

impl CacheConfig {
    /// Configuration rooted at the `MZ_CACHE_DIR` override or the default
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`CacheConfig::from_env`] with a caller-supplied lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let overridden = lookup(CACHE_DIR_ENV).is_some_and(|dir| !dir.is_empty());
        let cache_dir = resolve_cache_dir_with(&lookup);

        Self {
            cache_dir,
            source: if overridden {
                ConfigSource::EnvironmentVariable(CACHE_DIR_ENV.to_string())
            } else {
                ConfigSource::Default
            },
            ..Self::default()
        }
    }

    /// Configuration rooted at an explicit directory
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        CacheConfigBuilder::new().with_cache_dir(cache_dir).build()
    }

    /// Gzip settings, with the level clamped to the valid range
    pub fn compression(&self) -> Compression {
        Compression::new(self.compression_level.min(9))
    }
}

/// Source of the cache root, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Built-in default path
    Default,
    /// Environment variable override
    EnvironmentVariable(String),
    /// Set in code
    Explicit,
}

/// Builder for creating cache configurations
pub struct CacheConfigBuilder {
    config: CacheConfig,
}

impl CacheConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CacheConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: CacheConfig) -> Self {
        Self { config }
    }

    /// Set the cache root
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.config.cache_dir = cache_dir.into();
        self.config.source = ConfigSource::Explicit;
        self
    }

    /// Share an existing lock directory
    pub fn with_lock_dir(mut self, lock_dir: impl Into<PathBuf>) -> Self {
        self.config.lock_dir = Some(lock_dir.into());
        self
    }

    /// Set the gzip level
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.config.compression_level = level;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CacheConfig {
        self.config
    }
}

impl Default for CacheConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_lookup_without_override() {
        let config = CacheConfig::from_lookup(|_| None);
        assert_eq!(config.cache_dir, PathBuf::from("/var/tmp/mzcache"));
        assert_eq!(config.source, ConfigSource::Default);
        assert_eq!(config.lock_dir, None);
    }

    #[test]
    fn test_lookup_with_override() {
        let config = CacheConfig::from_lookup(|name| {
            (name == "MZ_CACHE_DIR").then(|| "/srv/cache".to_string())
        });
        assert_eq!(config.cache_dir, PathBuf::from("/srv/cache"));
        assert_eq!(
            config.source,
            ConfigSource::EnvironmentVariable("MZ_CACHE_DIR".to_string())
        );
    }

    #[test]
    fn test_empty_override_falls_back() {
        let config = CacheConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config.cache_dir, PathBuf::from(DEFAULT_CACHE_DIR));
        assert_eq!(config.source, ConfigSource::Default);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(CACHE_DIR_ENV, "/tmp/mz-from-env");
        let config = CacheConfig::from_env();
        std::env::remove_var(CACHE_DIR_ENV);
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/mz-from-env"));
    }

    #[test]
    fn test_builder() {
        let config = CacheConfigBuilder::new()
            .with_cache_dir("/data/cache")
            .with_lock_dir("/run/mzlocks")
            .with_compression_level(42)
            .build();

        assert_eq!(config.cache_dir, PathBuf::from("/data/cache"));
        assert_eq!(config.lock_dir, Some(PathBuf::from("/run/mzlocks")));
        assert_eq!(config.source, ConfigSource::Explicit);
        assert_eq!(config.compression(), Compression::best());
    }
}
