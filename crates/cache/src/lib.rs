//! Persistent filesystem cache for string values
//!
//! Values are gzip-compressed on disk under the SHA-256 of their key and can
//! be shared by many threads and processes on one machine:
//!
//! - `write` compresses, syncs and replaces the entry under a per-key lock
//! - `read`/`lookup` return the value, a miss, or an expiry judged on
//!   calendar days
//! - lock identity depends only on the hashed key, never on the cache root

pub mod config;
pub mod core;
pub mod errors;
pub mod freshness;
pub mod hashing;

pub use config::{CacheConfig, CacheConfigBuilder, ConfigSource};
pub use crate::core::{Cache, CacheStatistics, EntryPath, KeyLock, LockCoordinator, Lookup};
pub use errors::{CacheError, Error, ErrorKind, IoOperation, RecoveryHint, Result};
pub use hashing::hash_key;
