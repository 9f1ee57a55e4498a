use regiondb_store::StoreError;
use thiserror::Error;

/// Errors that can occur in historian operations.
#[derive(Error, Debug, Clone)]
pub enum HistorianError {
    /// The backing store rejected or failed the operation
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for historian operations.
pub type Result<T> = std::result::Result<T, HistorianError>;
