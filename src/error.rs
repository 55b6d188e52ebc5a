use std::io;

use thiserror::Error;

/// Failures surfaced by the task store. At most one attempt per
/// operation; nothing is retried or coerced here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed task file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no task at position {index} (list has {len})")]
    OutOfBounds { index: usize, len: usize },

    #[error("unknown status {0:?} (expected Pending, Working, or Complete)")]
    InvalidStatus(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let err = StoreError::OutOfBounds { index: 3, len: 1 };
        assert_eq!(err.to_string(), "no task at position 3 (list has 1)");

        let err = StoreError::InvalidStatus("Done".to_string());
        assert!(err.to_string().contains("\"Done\""));
    }

    #[test]
    fn io_errors_convert() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io_err.into();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
