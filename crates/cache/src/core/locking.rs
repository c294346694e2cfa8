//! Per-key cross-process locking
//!
//! Every read and write of a key runs while holding an exclusive advisory
//! lock on `<lock_dir>/<hash_key>`. The lock path depends only on the hash
//! key, so caches rooted in different directories still exclude each other
//! when they share a coordinator.
//!
//! Every live coordinator holds a shared lock on `<lock_dir>/.owner`. A
//! lock directory is only purged when that marker can be locked
//! exclusively, i.e. nobody is using it any more.

use crate::errors::{CacheError, RecoveryHint, Result};
use mzcache_utils::paths::ensure_dir_exists;
use mzcache_utils::{FileLock, FileLockError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Name prefix of process-lifetime lock directories
pub const LOCK_DIR_PREFIX: &str = "mz";

/// Marker file held by every coordinator using a lock directory
pub const OWNER_MARKER: &str = ".owner";

/// Hands out per-key locks from one lock directory
#[derive(Debug)]
pub struct LockCoordinator {
    lock_dir: PathBuf,
    // Released on drop, which makes the directory purgeable
    _owner: FileLock,
}

impl LockCoordinator {
    /// Create a fresh lock directory under `root`
    ///
    /// Lock directories left behind by earlier runs (names starting with
    /// `mz` and carrying an owner marker nobody holds) are removed first.
    /// Directories still used by a live coordinator, in this process or
    /// another, are left alone. Shard directories are hex, so they never
    /// match the prefix.
    pub fn initialize(root: &Path) -> Result<Self> {
        match ensure_dir_exists(root) {
            Ok(_) => {}
            Err(e) => {
                return Err(CacheError::LockDirectory {
                    path: root.to_path_buf(),
                    operation: "create parent of",
                    source: e,
                    recovery_hint: RecoveryHint::CheckPermissions {
                        path: root.to_path_buf(),
                    },
                });
            }
        }

        purge_stale_lock_dirs(root)?;

        let lock_dir = match tempfile::Builder::new()
            .prefix(LOCK_DIR_PREFIX)
            .tempdir_in(root)
        {
            Ok(dir) => dir.keep(),
            Err(e) => {
                return Err(CacheError::LockDirectory {
                    path: root.to_path_buf(),
                    operation: "create",
                    source: e,
                    recovery_hint: RecoveryHint::CheckPermissions {
                        path: root.to_path_buf(),
                    },
                });
            }
        };

        let owner = hold_owner_marker(&lock_dir)?;

        debug!(lock_dir = %lock_dir.display(), "initialized lock directory");
        Ok(Self {
            lock_dir,
            _owner: owner,
        })
    }

    /// Use an existing lock directory shared with other processes
    pub fn attach(lock_dir: &Path) -> Result<Self> {
        if !lock_dir.is_dir() {
            return Err(CacheError::LockDirectory {
                path: lock_dir.to_path_buf(),
                operation: "attach to",
                source: io::Error::new(io::ErrorKind::NotFound, "not a directory"),
                recovery_hint: RecoveryHint::Manual {
                    instructions: "Create the shared lock directory before starting".to_string(),
                },
            });
        }

        let owner = hold_owner_marker(lock_dir)?;

        Ok(Self {
            lock_dir: lock_dir.to_path_buf(),
            _owner: owner,
        })
    }

    /// Directory holding the lock files
    pub fn lock_dir(&self) -> &Path {
        &self.lock_dir
    }

    /// Lock file used for `hash_key`
    pub fn lock_path(&self, hash_key: &str) -> PathBuf {
        self.lock_dir.join(hash_key)
    }

    /// Block until the lock for `hash_key` is held
    pub fn acquire(&self, hash_key: &str) -> Result<KeyLock> {
        match FileLock::acquire(&self.lock_path(hash_key)) {
            Ok(lock) => Ok(KeyLock {
                lock,
                hash_key: hash_key.to_string(),
            }),
            Err(e) => Err(CacheError::Lock {
                hash_key: hash_key.to_string(),
                source: e,
                recovery_hint: RecoveryHint::Retry {
                    after: Duration::from_millis(100),
                },
            }),
        }
    }
}

/// A held per-key lock
///
/// Call [`KeyLock::release`] to learn whether unlocking worked; dropping the
/// guard unlocks silently.
#[derive(Debug)]
pub struct KeyLock {
    lock: FileLock,
    hash_key: String,
}

impl KeyLock {
    /// Release the lock
    pub fn release(self) -> Result<()> {
        let Self { lock, hash_key } = self;
        lock.unlock().map_err(|e| CacheError::Unlock {
            hash_key,
            source: e,
            recovery_hint: RecoveryHint::Ignore,
        })
    }
}

/// Take a shared lock on the owner marker of `lock_dir`
fn hold_owner_marker(lock_dir: &Path) -> Result<FileLock> {
    let marker = lock_dir.join(OWNER_MARKER);
    let owner = FileLock::acquire_shared(&marker).map_err(|e| CacheError::LockDirectory {
        path: lock_dir.to_path_buf(),
        operation: "claim",
        source: lock_error_source(e),
        recovery_hint: RecoveryHint::CheckPermissions {
            path: lock_dir.to_path_buf(),
        },
    })?;

    // A concurrent purge may have removed the directory before we held it
    if !lock_dir.is_dir() {
        return Err(CacheError::LockDirectory {
            path: lock_dir.to_path_buf(),
            operation: "claim",
            source: io::Error::new(io::ErrorKind::NotFound, "removed while claiming"),
            recovery_hint: RecoveryHint::Retry {
                after: Duration::from_millis(100),
            },
        });
    }

    Ok(owner)
}

fn lock_error_source(error: FileLockError) -> io::Error {
    match error {
        FileLockError::Open { source, .. }
        | FileLockError::Lock { source, .. }
        | FileLockError::Unlock { source, .. } => source,
        FileLockError::WouldBlock { path } => io::Error::new(
            io::ErrorKind::WouldBlock,
            format!("'{}' is locked", path.display()),
        ),
    }
}

/// Exclusive hold on the owner marker of `dir` when nobody else holds it
///
/// Directories without a marker were not created by a coordinator and are
/// never treated as stale.
fn claim_abandoned(dir: &Path) -> Option<FileLock> {
    let marker = dir.join(OWNER_MARKER);
    if !marker.is_file() {
        return None;
    }

    match FileLock::try_acquire(&marker) {
        Ok(lock) => Some(lock),
        Err(FileLockError::WouldBlock { .. }) => None,
        Err(e) => {
            debug!(path = %dir.display(), error = %e, "cannot inspect lock directory owner");
            None
        }
    }
}

fn purge_stale_lock_dirs(root: &Path) -> Result<()> {
    let entries = fs::read_dir(root).map_err(|e| CacheError::LockDirectory {
        path: root.to_path_buf(),
        operation: "scan for stale",
        source: e,
        recovery_hint: RecoveryHint::CheckPermissions {
            path: root.to_path_buf(),
        },
    })?;

    for entry in entries.flatten() {
        if !entry.file_name().to_string_lossy().starts_with(LOCK_DIR_PREFIX) {
            continue;
        }
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        // Held until removal finishes so a late attach sees the dir vanish
        let Some(_claim) = claim_abandoned(&path) else {
            continue;
        };

        match fs::remove_dir_all(&path) {
            Ok(()) => debug!(path = %path.display(), "removed stale lock directory"),
            // Another process purged it first
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to remove stale lock directory");
                return Err(CacheError::LockDirectory {
                    path,
                    operation: "remove stale",
                    source: e,
                    recovery_hint: RecoveryHint::CheckPermissions {
                        path: root.to_path_buf(),
                    },
                });
            }
        }
    }

    Ok(())
}
