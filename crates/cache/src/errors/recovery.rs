//! Recovery utilities for cache errors

use super::types::{CacheError, ErrorKind, RecoveryHint};

impl CacheError {
    /// Get the recovery hint for this error
    #[must_use]
    pub const fn recovery_hint(&self) -> &RecoveryHint {
        match self {
            Self::EmptyValue { recovery_hint, .. }
            | Self::CreateDirectory { recovery_hint, .. }
            | Self::LockDirectory { recovery_hint, .. }
            | Self::Lock { recovery_hint, .. }
            | Self::Unlock { recovery_hint, .. }
            | Self::Miss { recovery_hint, .. }
            | Self::Expired { recovery_hint, .. }
            | Self::Io { recovery_hint, .. }
            | Self::Decompress { recovery_hint, .. } => recovery_hint,
        }
    }

    /// Category of the failure
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyValue { .. } => ErrorKind::Validation,
            Self::CreateDirectory { .. } | Self::LockDirectory { .. } => ErrorKind::Environment,
            Self::Lock { .. } | Self::Unlock { .. } => ErrorKind::Concurrency,
            Self::Miss { .. } => ErrorKind::Absence,
            Self::Expired { .. } => ErrorKind::Staleness,
            Self::Io { .. } | Self::Decompress { .. } => ErrorKind::Corruption,
        }
    }

    /// Check if this error is transient and can be retried
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self.recovery_hint(), RecoveryHint::Retry { .. })
    }

    /// No entry exists for the key
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::Miss { .. })
    }

    /// The entry exists but fell out of the freshness window
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }

    /// Check if this error indicates an unreadable entry
    #[must_use]
    pub const fn is_corruption(&self) -> bool {
        matches!(self, Self::Decompress { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_miss_and_expired_are_distinct() {
        let miss = CacheError::Miss {
            path: PathBuf::from("a.gz"),
            recovery_hint: RecoveryHint::Recreate,
        };
        let expired = CacheError::Expired {
            path: PathBuf::from("a.gz"),
            recovery_hint: RecoveryHint::Recreate,
        };

        assert!(miss.is_miss());
        assert!(!miss.is_expired());
        assert!(expired.is_expired());
        assert!(!expired.is_miss());
        assert_eq!(miss.kind(), ErrorKind::Absence);
        assert_eq!(expired.kind(), ErrorKind::Staleness);
    }

    #[test]
    fn test_validation_is_not_transient() {
        let err = CacheError::EmptyValue {
            key: "k".to_string(),
            recovery_hint: RecoveryHint::Manual {
                instructions: "Pass a non-empty value".to_string(),
            },
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!err.is_transient());
        assert!(!err.is_corruption());
    }
}
