//! In-memory implementation of the `VersionedStore` trait.
//!
//! Backed by a `BTreeMap` per column so versions stay timestamp-ordered.
//! Used by unit tests in dependent crates and by embedded deployments that
//! do not want a RocksDB directory.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::versioned::{Version, VersionedStore};
use crate::write_clock::WriteClock;

type ColumnId = (Vec<u8>, Vec<u8>);

/// In-memory versioned store. Data is lost when the handle is dropped.
pub struct InMemoryVersionedStore {
    /// (row, column) -> timestamp -> value
    columns: RwLock<BTreeMap<ColumnId, BTreeMap<i64, Vec<u8>>>>,
    clock: WriteClock,
}

impl InMemoryVersionedStore {
    pub fn new() -> Self {
        Self {
            columns: RwLock::new(BTreeMap::new()),
            clock: WriteClock::new(),
        }
    }

    /// Number of retained versions for one `(row, column)` pair.
    pub fn version_count(&self, row_key: &[u8], column_key: &[u8]) -> usize {
        self.columns
            .read()
            .map(|columns| {
                columns
                    .get(&(row_key.to_vec(), column_key.to_vec()))
                    .map_or(0, |versions| versions.len())
            })
            .unwrap_or(0)
    }
}

impl Default for InMemoryVersionedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionedStore for InMemoryVersionedStore {
    fn put(
        &self,
        row_key: &[u8],
        column_key: &[u8],
        value: &[u8],
        timestamp: Option<i64>,
    ) -> Result<()> {
        let ts = match timestamp {
            Some(ts) => ts,
            None => self.clock.next_timestamp()?,
        };

        let mut columns = self
            .columns
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        columns
            .entry((row_key.to_vec(), column_key.to_vec()))
            .or_default()
            .insert(ts, value.to_vec());
        Ok(())
    }

    fn get_versions(
        &self,
        row_key: &[u8],
        column_key: &[u8],
        max_versions: usize,
    ) -> Result<Vec<Version>> {
        let columns = self
            .columns
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        let Some(versions) = columns.get(&(row_key.to_vec(), column_key.to_vec())) else {
            return Ok(Vec::new());
        };

        // BTreeMap iterates ascending; reverse for newest-first.
        Ok(versions
            .iter()
            .rev()
            .take(max_versions)
            .map(|(&timestamp, value)| Version {
                timestamp,
                value: value.clone(),
            })
            .collect())
    }
}
