//! Versioned store abstraction consumed by the historian.
//!
//! The trait is deliberately narrow: append one timestamped version under a
//! `(row, column)` pair, or read every retained version of that pair. Range
//! scans, deletes and batches are not part of this boundary.

use crate::error::Result;

/// Request every retained version of a column (no version-count cap).
pub const ALL_VERSIONS: usize = usize::MAX;

/// One timestamped value stored under a `(row_key, column_key)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    /// Write time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Raw value bytes as written.
    pub value: Vec<u8>,
}

/// Trait for versioned key-value store implementations.
///
/// Implementations must be thread-safe (Send + Sync); a single handle is
/// shared across all writer and reader invocations for the process's
/// lifetime. Calls may block on I/O; the store adds no timeout of its own.
pub trait VersionedStore: Send + Sync {
    /// Appends one version under `(row_key, column_key, timestamp)`.
    ///
    /// `None` requests a store-assigned write time. Store-assigned
    /// timestamps are strictly monotonic per handle, so distinct calls
    /// always produce distinct versions. Writing an explicit timestamp that
    /// already exists for the exact same row and column overwrites that
    /// version (last write wins).
    fn put(
        &self,
        row_key: &[u8],
        column_key: &[u8],
        value: &[u8],
        timestamp: Option<i64>,
    ) -> Result<()>;

    /// Returns up to `max_versions` stored versions for `(row_key,
    /// column_key)`, newest first.
    ///
    /// An unknown row or column yields `Ok(vec![])`, not an error. Pass
    /// [`ALL_VERSIONS`] for no cap; the cap keeps the newest entries.
    fn get_versions(
        &self,
        row_key: &[u8],
        column_key: &[u8],
        max_versions: usize,
    ) -> Result<Vec<Version>>;
}
