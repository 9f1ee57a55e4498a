use thiserror::Error;

/// Errors that can occur during versioned store operations.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// Store handle cannot be used at all (clock failure, closed database)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A specific read or write against the backing store failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Partition (column family) not found
    #[error("Partition not found: {0}")]
    PartitionNotFound(String),

    /// Stored key bytes could not be decoded
    #[error("Corrupt key: {0}")]
    Corrupt(String),

    /// Lock poisoning error (internal concurrency issue)
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type for versioned store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::PartitionNotFound("meta".to_string());
        assert_eq!(err.to_string(), "Partition not found: meta");

        let err = StoreError::Io("disk full".to_string());
        assert_eq!(err.to_string(), "I/O error: disk full");
    }
}
