//! Region identity as seen by the historian.
//!
//! Region identity is owned by the region-management subsystem; the
//! historian only needs the metadata row key and whether the region is the
//! reserved meta/root row.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque row key uniquely identifying a region in the metadata table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A region as passed into the historian: its row key plus the reserved-row
/// flag. Audit records are never written for meta/root regions, so the
/// bookkeeping row itself does not accumulate history columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    id: RegionId,
    meta: bool,
}

impl RegionInfo {
    /// A regular user-table region.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RegionId::new(name),
            meta: false,
        }
    }

    /// The reserved meta/root region.
    pub fn meta(name: impl Into<String>) -> Self {
        Self {
            id: RegionId::new(name),
            meta: true,
        }
    }

    pub fn id(&self) -> &RegionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    /// Row key of this region in the metadata table.
    pub fn row_key(&self) -> &[u8] {
        self.id.as_bytes()
    }

    pub fn is_meta(&self) -> bool {
        self.meta
    }
}

impl fmt::Display for RegionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_is_name_bytes() {
        let region = RegionInfo::new("users,row-100,1730000000000");
        assert_eq!(region.row_key(), b"users,row-100,1730000000000");
        assert!(!region.is_meta());
    }

    #[test]
    fn test_meta_flag() {
        let region = RegionInfo::meta(".META.,,1");
        assert!(region.is_meta());
        assert_eq!(region.name(), ".META.,,1");
    }
}
