//! The fixed set of region lifecycle event kinds and their audit columns.

use serde::{Deserialize, Serialize};

/// Column family reserved for region audit history in the metadata table.
pub const HISTORIAN_FAMILY: &str = "historian";

/// A kind of region lifecycle event. Closed set; each kind maps 1:1 to a
/// column key of the region's metadata row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Creation,
    Open,
    Split,
    Compaction,
    Flush,
    Assignment,
}

impl EventKind {
    /// Every event kind, in registry order. The order carries no output
    /// semantics; history ordering is timestamp-based.
    pub const ALL: [EventKind; 6] = [
        EventKind::Creation,
        EventKind::Open,
        EventKind::Split,
        EventKind::Compaction,
        EventKind::Flush,
        EventKind::Assignment,
    ];

    /// Durable on-disk column key for this kind. These bytes are a
    /// compatibility contract with previously written history; changing
    /// them orphans existing records.
    pub const fn column_key(self) -> &'static [u8] {
        match self {
            EventKind::Creation => b"historian:creation",
            EventKind::Open => b"historian:open",
            EventKind::Split => b"historian:split",
            EventKind::Compaction => b"historian:compaction",
            EventKind::Flush => b"historian:flush",
            EventKind::Assignment => b"historian:assignment",
        }
    }

    /// Human-readable label, the qualifier part of the column key.
    pub const fn label(self) -> &'static str {
        match self {
            EventKind::Creation => "creation",
            EventKind::Open => "open",
            EventKind::Split => "split",
            EventKind::Compaction => "compaction",
            EventKind::Flush => "flush",
            EventKind::Assignment => "assignment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_column_keys_are_distinct() {
        let keys: HashSet<_> = EventKind::ALL.iter().map(|k| k.column_key()).collect();
        assert_eq!(keys.len(), EventKind::ALL.len());
    }

    #[test]
    fn test_column_keys_carry_family_and_label() {
        for kind in EventKind::ALL {
            let key = std::str::from_utf8(kind.column_key()).unwrap();
            let (family, qualifier) = key.split_once(':').unwrap();
            assert_eq!(family, HISTORIAN_FAMILY);
            assert_eq!(qualifier, kind.label());
        }
    }
}
