//! Cache engine
//!
//! - Entries addressed by the SHA-256 of the key, sharded two levels deep
//! - Values stored as gzip streams, synced before the key lock is released
//! - Per-key advisory file locks shared across threads and processes
//! - Freshness judged on calendar days at read time

pub mod internal;

// Private modules
mod builder;
mod locking;
mod operations;
mod paths;
mod types;

pub use locking::{KeyLock, LockCoordinator, LOCK_DIR_PREFIX};
pub use operations::misc::CacheStatistics;
pub use paths::{EntryPath, ENTRY_SUFFIX};
pub use types::{Cache, Lookup};

#[cfg(test)]
mod tests;
