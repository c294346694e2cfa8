//! Disk write operations for put

use crate::core::operations::utils::compress_into;
use crate::core::types::Cache;
use crate::errors::{CacheError, IoOperation, RecoveryHint, Result};
use std::fs::OpenOptions;
use std::path::Path;

impl Cache {
    /// Write the compressed value to `path` and sync it
    ///
    /// The file is truncated in place rather than removed and recreated, so a
    /// concurrent existence check never sees the path missing. Caller holds
    /// the key lock.
    pub(super) fn write_entry(&self, path: &Path, data: &[u8]) -> Result<()> {
        let file = match OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
        {
            Ok(file) => file,
            Err(e) => return Err(io_error(path, IoOperation::Create, e)),
        };

        // Finish the gzip stream before syncing so the trailer is durable too
        let file = match compress_into(file, data, self.inner.compression) {
            Ok(file) => file,
            Err(e) => return Err(io_error(path, IoOperation::Write, e)),
        };

        match file.sync_all() {
            Ok(()) => Ok(()),
            Err(e) => Err(io_error(path, IoOperation::Sync, e)),
        }
    }
}

fn io_error(path: &Path, operation: IoOperation, source: std::io::Error) -> CacheError {
    CacheError::Io {
        path: path.to_path_buf(),
        operation,
        source,
        recovery_hint: RecoveryHint::CheckPermissions {
            path: path.to_path_buf(),
        },
    }
}
