//! # regiondb-historian
//!
//! Lifecycle audit trail for regions of the distributed table store. Every
//! modification a region goes through (creation, open, split, compaction,
//! flush, server assignment) is appended as a timestamped, free-text record
//! under a per-event-kind column of the region's row in the metadata table,
//! and can be read back as one reverse-chronological sequence.
//!
//! ## Architecture
//!
//! ```text
//! RegionHistorian (append + fetch, this crate)
//!     ↓
//! VersionedStore  (regiondb-store boundary trait)
//!     ↓
//! RocksDB / in-memory
//! ```
//!
//! Recording is strictly best-effort: the convenience `record_*` operations
//! swallow and log store failures so a region split never fails because its
//! audit record could not be written. Callers who need visibility use the
//! `try_*` variants instead.

pub mod error;
pub mod event_kind;
pub mod historian;
pub mod record;
pub mod region;
pub mod settings;

pub use error::{HistorianError, Result};
pub use event_kind::EventKind;
pub use historian::{HistoryFetch, RegionHistorian};
pub use record::HistoryRecord;
pub use region::{RegionId, RegionInfo};
pub use settings::HistorianSettings;
