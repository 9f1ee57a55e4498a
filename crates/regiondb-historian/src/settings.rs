//! Historian configuration.

use serde::{Deserialize, Serialize};

/// Historian settings, usually deserialized as part of the server config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorianSettings {
    /// Record compaction and flush events. These fire on every maintenance
    /// cycle and would flood the metadata table, so they are only written
    /// when detailed diagnostics are wanted.
    #[serde(default)]
    pub record_maintenance_events: bool,
}

impl HistorianSettings {
    /// Settings with maintenance (compaction/flush) events enabled.
    pub fn verbose() -> Self {
        Self {
            record_maintenance_events: true,
        }
    }
}

impl Default for HistorianSettings {
    fn default() -> Self {
        Self {
            record_maintenance_events: false,
        }
    }
}
