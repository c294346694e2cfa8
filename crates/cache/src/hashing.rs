//! Key hashing
//!
//! A cache key is addressed and locked by the SHA-256 digest of its bytes,
//! rendered as 64 lowercase hex characters.

use sha2::{Digest, Sha256};

/// Length of a hash key in hex characters
pub const HASH_KEY_LEN: usize = 64;

/// Hash a cache key into its hex digest
#[inline]
pub fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}
