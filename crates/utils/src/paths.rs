//! Cache root resolution and directory helpers
//!
//! The cache root is resolved from the environment once, by whoever builds
//! the cache configuration. Nothing in the engine reads the environment.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding the cache root
pub const CACHE_DIR_ENV: &str = "MZ_CACHE_DIR";

/// Cache root used when [`CACHE_DIR_ENV`] is unset or empty
pub const DEFAULT_CACHE_DIR: &str = "/var/tmp/mzcache";

/// Resolve the cache root from the process environment
///
/// Returns the value of `MZ_CACHE_DIR` when it is set to a non-empty string,
/// otherwise `/var/tmp/mzcache`.
pub fn resolve_cache_dir() -> PathBuf {
    resolve_cache_dir_with(|name| env::var(name).ok())
}

/// Resolve the cache root using a caller-supplied variable lookup
pub fn resolve_cache_dir_with<F>(lookup: F) -> PathBuf
where
    F: FnOnce(&str) -> Option<String>,
{
    match lookup(CACHE_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_CACHE_DIR),
    }
}

/// Make sure `dir` exists, tolerating concurrent creators
///
/// Returns `true` when this call created the directory. A failed create is
/// only reported if the directory still does not exist afterwards.
pub fn ensure_dir_exists(dir: &Path) -> io::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }

    match fs::create_dir_all(dir) {
        Ok(()) => Ok(true),
        Err(_) if dir.is_dir() => Ok(false),
        Err(e) => Err(e),
    }
}
