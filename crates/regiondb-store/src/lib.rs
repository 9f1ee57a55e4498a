//! # regiondb-store
//!
//! Versioned key-value boundary for the regiondb metadata table. This crate
//! isolates all direct RocksDB interactions behind the `VersionedStore`
//! trait, allowing regiondb-historian to remain free of RocksDB dependencies.
//!
//! ## Architecture
//!
//! ```text
//! regiondb-historian (audit trail logic)
//!     ↓
//! regiondb-store (versioned K/V operations)
//!     ↓
//! RocksDB (storage engine)
//! ```
//!
//! ## Version Model
//!
//! Every value is stored under `(row_key, column_key, timestamp)`. The store
//! retains all versions of a column; `get_versions` returns them newest
//! first. A write without an explicit timestamp gets a store-assigned,
//! strictly monotonic millisecond timestamp from [`WriteClock`].

pub mod error;
pub mod key_encoding;
pub mod memory;
pub mod rocksdb_store;
pub mod test_utils;
pub mod versioned;
pub mod write_clock;

pub use error::{Result, StoreError};
pub use memory::InMemoryVersionedStore;
pub use rocksdb_store::RocksDbVersionedStore;
pub use versioned::{Version, VersionedStore, ALL_VERSIONS};
pub use write_clock::WriteClock;
