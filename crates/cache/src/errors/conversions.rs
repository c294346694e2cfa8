//! Error conversion utilities

use super::types::{CacheError, ErrorKind};
use std::io;

/// Lets hosts that speak `std::io` propagate cache errors with `?`
impl From<CacheError> for io::Error {
    fn from(error: CacheError) -> Self {
        let kind = match error.kind() {
            ErrorKind::Validation => io::ErrorKind::InvalidInput,
            ErrorKind::Absence => io::ErrorKind::NotFound,
            ErrorKind::Corruption => match &error {
                CacheError::Io { source, .. } => source.kind(),
                _ => io::ErrorKind::InvalidData,
            },
            ErrorKind::Environment | ErrorKind::Concurrency | ErrorKind::Staleness => {
                io::ErrorKind::Other
            }
        };
        io::Error::new(kind, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RecoveryHint;
    use std::path::PathBuf;

    #[test]
    fn test_miss_becomes_not_found() {
        let err: io::Error = CacheError::Miss {
            path: PathBuf::from("a.gz"),
            recovery_hint: RecoveryHint::Recreate,
        }
        .into();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("a.gz"));
    }

    #[test]
    fn test_decompress_becomes_invalid_data() {
        let err: io::Error = CacheError::Decompress {
            path: PathBuf::from("a.gz"),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"),
            recovery_hint: RecoveryHint::Recreate,
        }
        .into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
