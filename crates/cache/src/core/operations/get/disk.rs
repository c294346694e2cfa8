//! Disk loading operations for get

use crate::core::operations::utils::decompress;
use crate::core::types::{Cache, Lookup};
use crate::errors::{CacheError, IoOperation, RecoveryHint, Result};
use crate::freshness;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

impl Cache {
    /// Load and decode the entry at `path`. Caller holds the key lock.
    pub(super) fn read_entry(&self, path: &Path, days: u32) -> Result<Lookup> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Lookup::Miss),
            Err(e) => return Err(io_error(path, IoOperation::Stat, e)),
        };

        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(e) => return Err(io_error(path, IoOperation::Stat, e)),
        };

        if !freshness::is_fresh(modified, days, freshness::today()) {
            return Ok(Lookup::Expired {
                path: path.to_path_buf(),
            });
        }

        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) => return Err(io_error(path, IoOperation::Open, e)),
        };

        let mut compressed = Vec::new();
        if let Err(e) = file.read_to_end(&mut compressed) {
            return Err(io_error(path, IoOperation::Read, e));
        }

        let data = match decompress(&compressed) {
            Ok(data) => data,
            Err(e) => return Err(decompress_error(path, e)),
        };

        match String::from_utf8(data) {
            Ok(value) => Ok(Lookup::Hit(value)),
            Err(e) => Err(decompress_error(
                path,
                io::Error::new(io::ErrorKind::InvalidData, e),
            )),
        }
    }
}

fn io_error(path: &Path, operation: IoOperation, source: io::Error) -> CacheError {
    CacheError::Io {
        path: path.to_path_buf(),
        operation,
        source,
        recovery_hint: RecoveryHint::CheckPermissions {
            path: path.to_path_buf(),
        },
    }
}

fn decompress_error(path: &Path, source: io::Error) -> CacheError {
    CacheError::Decompress {
        path: path.to_path_buf(),
        source,
        recovery_hint: RecoveryHint::Recreate,
    }
}
