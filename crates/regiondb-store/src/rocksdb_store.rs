//! RocksDB implementation of the `VersionedStore` trait.
//!
//! Maps the store to one RocksDB column family; each version becomes one
//! key `(row_key, column_key, timestamp)` in storekey order-preserving
//! encoding, so all versions of one column are contiguous and
//! timestamp-ordered on disk.

use std::sync::Arc;

use rocksdb::{ColumnFamily, Direction, IteratorMode, DB};

use crate::error::{Result, StoreError};
use crate::key_encoding;
use crate::versioned::{Version, VersionedStore};
use crate::write_clock::WriteClock;

/// RocksDB-backed versioned store.
///
/// ## Example
///
/// ```rust,ignore
/// use regiondb_store::{RocksDbVersionedStore, VersionedStore, ALL_VERSIONS};
/// use std::sync::Arc;
///
/// let store = RocksDbVersionedStore::new(db, "meta");
/// store.put(b"region-a", b"historian:open", b"opened", None)?;
/// let versions = store.get_versions(b"region-a", b"historian:open", ALL_VERSIONS)?;
/// ```
pub struct RocksDbVersionedStore {
    db: Arc<DB>,
    /// Column family holding the versioned table
    partition: String,
    clock: WriteClock,
}

impl RocksDbVersionedStore {
    /// Creates a store over an existing column family of `db`.
    pub fn new(db: Arc<DB>, partition: impl Into<String>) -> Self {
        let partition = partition.into();
        log::debug!("Versioned store ready over partition '{}'", partition);
        Self {
            db,
            partition,
            clock: WriteClock::new(),
        }
    }

    /// Returns a reference to the underlying database.
    pub fn db(&self) -> &Arc<DB> {
        &self.db
    }

    fn cf(&self) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(&self.partition)
            .ok_or_else(|| StoreError::PartitionNotFound(self.partition.clone()))
    }
}

impl VersionedStore for RocksDbVersionedStore {
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

        let cf = self.cf()?;
        let key = key_encoding::version_key(row_key, column_key, ts);
        self.db
            .put_cf(cf, key, value)
            .map_err(|e| StoreError::Io(e.to_string()))
    }

    fn get_versions(
        &self,
        row_key: &[u8],
        column_key: &[u8],
        max_versions: usize,
    ) -> Result<Vec<Version>> {
        let cf = self.cf()?;
        let prefix = key_encoding::column_prefix(row_key, column_key);

        let mut versions = Vec::new();
        let iter = self
            .db
            .iterator_cf(cf, IteratorMode::From(prefix.as_slice(), Direction::Forward));
        for item in iter {
            let (key, value) = item.map_err(|e| StoreError::Io(e.to_string()))?;
            if !key.starts_with(&prefix) {
                break;
            }
            let (_, _, timestamp) = key_encoding::decode_version_key(&key)?;
            versions.push(Version {
                timestamp,
                value: value.to_vec(),
            });
        }

        // Forward scan yields ascending timestamps; callers get newest first.
        versions.reverse();
        versions.truncate(max_versions);
        Ok(versions)
    }
}
