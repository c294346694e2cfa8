//! Advisory file locks shared across threads and processes

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while taking or dropping an advisory lock
#[derive(Debug, thiserror::Error)]
pub enum FileLockError {
    #[error("Failed to open lock file '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to lock '{}': {source}", path.display())]
    Lock { path: PathBuf, source: io::Error },

    #[error("Lock on '{}' is held elsewhere", path.display())]
    WouldBlock { path: PathBuf },

    #[error("Failed to unlock '{}': {source}", path.display())]
    Unlock { path: PathBuf, source: io::Error },
}

impl FileLockError {
    /// Path of the lock file involved in the failure
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Lock { path, .. }
            | Self::WouldBlock { path }
            | Self::Unlock { path, .. } => path,
        }
    }
}

/// A lock on a file, held until [`FileLock::unlock`] or drop
///
/// Each lock owns its own open file description, so two handles for the same
/// path exclude each other even inside one process.
#[derive(Debug)]
pub struct FileLock {
    file: File,
    path: PathBuf,
    locked: bool,
}

impl FileLock {
    /// Block until an exclusive lock on `path` is held
    pub fn acquire(path: &Path) -> Result<Self, FileLockError> {
        let file = open_lock_file(path)?;

        file.lock_exclusive().map_err(|e| FileLockError::Lock {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            locked: true,
        })
    }

    /// Block until a shared lock on `path` is held
    ///
    /// Shared holders coexist with each other but keep exclusive lockers out.
    pub fn acquire_shared(path: &Path) -> Result<Self, FileLockError> {
        let file = open_lock_file(path)?;

        file.lock_shared().map_err(|e| FileLockError::Lock {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            locked: true,
        })
    }

    /// Take the exclusive lock only if nobody else holds any lock
    pub fn try_acquire(path: &Path) -> Result<Self, FileLockError> {
        let file = open_lock_file(path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self {
                file,
                path: path.to_path_buf(),
                locked: true,
            }),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(FileLockError::WouldBlock {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => Err(FileLockError::Lock {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Path of the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the lock, reporting failure instead of swallowing it
    pub fn unlock(mut self) -> Result<(), FileLockError> {
        self.locked = false;
        FileExt::unlock(&self.file).map_err(|e| FileLockError::Unlock {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // The lock file stays on disk: removing it would let a waiter and a
        // newcomer lock two different inodes for the same path.
        if self.locked {
            let _ = FileExt::unlock(&self.file);
        }
    }
}

fn open_lock_file(path: &Path) -> Result<File, FileLockError> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| FileLockError::Open {
            path: path.to_path_buf(),
            source: e,
        })
}
