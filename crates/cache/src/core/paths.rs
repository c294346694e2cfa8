//! Path generation for cache entries
//!
//! Layout: `<root>/<hash[0:2]>/<hash[2:4]>/<hash[4:64]>.gz`. Two levels of
//! two hex digits keep every directory at 256 children or fewer.

use crate::hashing::hash_key;
use std::path::{Path, PathBuf};

/// Suffix of every entry file
pub const ENTRY_SUFFIX: &str = ".gz";

/// Where one cache key lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPath {
    /// Two-level shard directory holding the entry
    pub shard_dir: PathBuf,
    /// Gzip file holding the value
    pub entry_file: PathBuf,
    /// SHA-256 hex digest of the key
    pub hash_key: String,
}

impl EntryPath {
    /// Resolve `key` under `root`
    #[inline]
    pub fn resolve(root: &Path, key: &str) -> Self {
        let hash_key = hash_key(key);
        let shard_dir = root.join(&hash_key[..2]).join(&hash_key[2..4]);
        let entry_file = shard_dir.join(format!("{}{ENTRY_SUFFIX}", &hash_key[4..]));

        Self {
            shard_dir,
            entry_file,
            hash_key,
        }
    }
}
