//! Display implementations for cache errors

use super::types::{CacheError, IoOperation};
use std::fmt;

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { key, .. } => {
                write!(f, "Refusing to cache an empty value for key '{key}'")
            }
            Self::CreateDirectory { path, source, .. } => write!(
                f,
                "Unable to create cache directory '{}': {}",
                path.display(),
                source
            ),
            Self::LockDirectory {
                path,
                operation,
                source,
                ..
            } => write!(
                f,
                "Unable to {} lock directory '{}': {}",
                operation,
                path.display(),
                source
            ),
            Self::Lock {
                hash_key, source, ..
            } => write!(f, "Unable to lock cache key {hash_key}: {source}"),
            Self::Unlock {
                hash_key, source, ..
            } => write!(f, "Unable to unlock cache key {hash_key}: {source}"),
            Self::Miss { path, .. } => {
                write!(f, "Cache file does not exist: {}", path.display())
            }
            Self::Expired { path, .. } => write!(f, "Cache expired {}", path.display()),
            Self::Io {
                path,
                operation,
                source,
                ..
            } => write!(
                f,
                "Unable to {} cache file '{}': {}",
                operation,
                path.display(),
                source
            ),
            Self::Decompress { path, source, .. } => write!(
                f,
                "Unable to decompress cache file '{}': {}",
                path.display(),
                source
            ),
        }
    }
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Create => "create",
            Self::Write => "write to",
            Self::Sync => "sync",
            Self::Stat => "stat",
            Self::Open => "open",
            Self::Read => "read",
        };
        f.write_str(verb)
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDirectory { source, .. }
            | Self::LockDirectory { source, .. }
            | Self::Io { source, .. }
            | Self::Decompress { source, .. } => Some(source),
            Self::Lock { source, .. } | Self::Unlock { source, .. } => Some(source),
            Self::EmptyValue { .. } | Self::Miss { .. } | Self::Expired { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RecoveryHint;
    use std::error::Error as _;
    use std::path::PathBuf;

    #[test]
    fn test_expired_message_names_the_file() {
        let err = CacheError::Expired {
            path: PathBuf::from("/var/tmp/mzcache/fd/4f/rest.gz"),
            recovery_hint: RecoveryHint::Recreate,
        };
        assert_eq!(
            err.to_string(),
            "Cache expired /var/tmp/mzcache/fd/4f/rest.gz"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_message_includes_operation_and_source() {
        let err = CacheError::Io {
            path: PathBuf::from("/x.gz"),
            operation: IoOperation::Sync,
            source: std::io::Error::other("disk gone"),
            recovery_hint: RecoveryHint::Recreate,
        };
        let message = err.to_string();
        assert!(message.contains("sync"));
        assert!(message.contains("/x.gz"));
        assert!(message.contains("disk gone"));
        assert!(err.source().is_some());
    }
}
