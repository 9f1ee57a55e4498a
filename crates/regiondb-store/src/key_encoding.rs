//! Version key encoding for RocksDB.
//!
//! This module uses the `storekey` crate to ensure proper lexicographic
//! ordering of serialized version keys. RocksDB stores keys in byte-by-byte
//! order, so a version key must sort first by row, then by column, then
//! numerically by timestamp. Naive encodings like
//! `{row}:{column}:{timestamp}` break the timestamp component ("9" sorts
//! after "10"); storekey's escape-sequence tuple encoding preserves the
//! natural order of each element and keeps the `(row, column)` encoding a
//! byte-prefix of the full `(row, column, timestamp)` key, which is what
//! makes the per-column version scan work.

use std::io::Cursor;

use storekey::{Decode, Encode};

use crate::error::{Result, StoreError};

/// Encode the full version key `(row_key, column_key, timestamp)`.
pub fn version_key(row_key: &[u8], column_key: &[u8], timestamp: i64) -> Vec<u8> {
    encode(&(row_key.to_vec(), column_key.to_vec(), timestamp))
}

/// Encode the `(row_key, column_key)` prefix shared by every version of one
/// column. Every `version_key` for the pair starts with these bytes.
pub fn column_prefix(row_key: &[u8], column_key: &[u8]) -> Vec<u8> {
    encode(&(row_key.to_vec(), column_key.to_vec()))
}

/// Decode a version key back into `(row_key, column_key, timestamp)`.
pub fn decode_version_key(bytes: &[u8]) -> Result<(Vec<u8>, Vec<u8>, i64)> {
    decode(bytes)
}

fn encode<T: Encode>(value: &T) -> Vec<u8> {
    storekey::encode_vec(value).expect("storekey encoding should not fail for valid types")
}

fn decode<T: Decode>(bytes: &[u8]) -> Result<T> {
    storekey::decode(&mut Cursor::new(bytes))
        .map_err(|e| StoreError::Corrupt(format!("version key decode failed: {:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let key = version_key(b"region-a", b"historian:open", 1730000000000);
        let (row, column, ts) = decode_version_key(&key).unwrap();
        assert_eq!(row, b"region-a");
        assert_eq!(column, b"historian:open");
        assert_eq!(ts, 1730000000000);
    }

    #[test]
    fn test_prefix_property() {
        let prefix = column_prefix(b"region-a", b"historian:open");
        let key = version_key(b"region-a", b"historian:open", 42);
        assert!(key.starts_with(&prefix));

        let other_column = version_key(b"region-a", b"historian:split", 42);
        assert!(!other_column.starts_with(&prefix));

        let other_row = version_key(b"region-b", b"historian:open", 42);
        assert!(!other_row.starts_with(&prefix));
    }

    #[test]
    fn test_timestamps_sort_numerically() {
        // "9" > "10" lexicographically; the encoding must not have that bug.
        let k9 = version_key(b"r", b"c", 9);
        let k10 = version_key(b"r", b"c", 10);
        let k100 = version_key(b"r", b"c", 100);
        assert!(k9 < k10);
        assert!(k10 < k100);
    }

    #[test]
    fn test_rows_sort_before_timestamps() {
        // All versions of one row's column stay contiguous regardless of
        // timestamp magnitude.
        let a_late = version_key(b"region-a", b"c", i64::MAX);
        let b_early = version_key(b"region-b", b"c", 0);
        assert!(a_late < b_early);
    }
}
