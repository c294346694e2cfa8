//! Core error types for the cache system

use mzcache_utils::FileLockError;
use std::path::PathBuf;
use std::time::Duration;

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Re-export CacheError as Error for convenience
pub use CacheError as Error;

/// Error type for cache operations
#[derive(Debug)]
pub enum CacheError {
    /// An empty value was passed to a write
    EmptyValue {
        key: String,
        recovery_hint: RecoveryHint,
    },

    /// A shard directory could not be created
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
        recovery_hint: RecoveryHint,
    },

    /// The lock directory could not be prepared
    LockDirectory {
        path: PathBuf,
        operation: &'static str,
        source: std::io::Error,
        recovery_hint: RecoveryHint,
    },

    /// The per-key lock could not be taken
    Lock {
        hash_key: String,
        source: FileLockError,
        recovery_hint: RecoveryHint,
    },

    /// The per-key lock could not be released
    Unlock {
        hash_key: String,
        source: FileLockError,
        recovery_hint: RecoveryHint,
    },

    /// No entry exists for the key
    Miss {
        path: PathBuf,
        recovery_hint: RecoveryHint,
    },

    /// The entry is older than the freshness window
    Expired {
        path: PathBuf,
        recovery_hint: RecoveryHint,
    },

    /// I/O errors on the entry file
    Io {
        path: PathBuf,
        operation: IoOperation,
        source: std::io::Error,
        recovery_hint: RecoveryHint,
    },

    /// The entry file is not a readable gzip stream of UTF-8 text
    Decompress {
        path: PathBuf,
        source: std::io::Error,
        recovery_hint: RecoveryHint,
    },
}

/// File operation that failed inside [`CacheError::Io`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Create,
    Write,
    Sync,
    Stat,
    Open,
    Read,
}

/// Broad category of a [`CacheError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected input, nothing touched on disk
    Validation,
    /// Directories missing or not writable
    Environment,
    /// Lock acquisition or release failed
    Concurrency,
    /// No entry for the key
    Absence,
    /// Entry outside the freshness window
    Staleness,
    /// Entry exists but cannot be written, opened, decompressed or read
    Corruption,
}

/// Recovery hints for error handling
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryHint {
    /// Retry the operation
    Retry { after: Duration },

    /// Check file permissions
    CheckPermissions { path: PathBuf },

    /// Compute the value again and write it
    Recreate,

    /// The operation itself completed; the error can be ignored
    Ignore,

    /// No automated recovery possible
    Manual { instructions: String },
}
