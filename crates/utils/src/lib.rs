//! Shared utilities for mzcache
//!
//! The pieces here sit outside the cache engine: resolving the cache root
//! from the environment, advisory file locking, and tracing setup.

pub mod file_lock;
pub mod paths;
pub mod tracing;

pub use file_lock::{FileLock, FileLockError};
pub use paths::{ensure_dir_exists, resolve_cache_dir, CACHE_DIR_ENV, DEFAULT_CACHE_DIR};
