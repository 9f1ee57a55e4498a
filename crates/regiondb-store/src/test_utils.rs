//! Test utilities for regiondb-store.
//!
//! Provides helpers for setting up test databases with minimal boilerplate.

use anyhow::Result;
use rocksdb::{Options, DB};
use std::sync::Arc;
use tempfile::TempDir;

/// Test database wrapper that automatically cleans up on drop.
pub struct TestDb {
    /// RocksDB instance
    pub db: Arc<DB>,
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with the specified column families.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use regiondb_store::test_utils::TestDb;
    ///
    /// let test_db = TestDb::new(&["meta", "user_regions"]).unwrap();
    /// // Use test_db.db for testing...
    /// ```
    pub fn new(partition_names: &[&str]) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let db = DB::open_cf(&opts, temp_dir.path(), partition_names)?;

        Ok(Self {
            db: Arc::new(db),
            temp_dir,
        })
    }

    /// Create a test database with a single column family.
    pub fn single_partition(name: &str) -> Result<Self> {
        Self::new(&[name])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_db() {
        let test_db = TestDb::new(&["meta", "user_regions"]).unwrap();

        assert!(test_db.db.cf_handle("meta").is_some());
        assert!(test_db.db.cf_handle("user_regions").is_some());
    }

    #[test]
    fn test_single_partition() {
        let test_db = TestDb::single_partition("meta").unwrap();

        assert!(test_db.db.cf_handle("meta").is_some());
    }
}
