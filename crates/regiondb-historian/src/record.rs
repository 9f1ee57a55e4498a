//! History record value object.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

/// One region lifecycle event as materialized on read.
///
/// A read-side projection only: records are never persisted as their own
/// entity. The timestamp is the backing store's write time in milliseconds;
/// the event label names the column the record came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    timestamp: i64,
    event: String,
    description: String,
}

impl HistoryRecord {
    pub fn new(timestamp: i64, event: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            timestamp,
            event: event.into(),
            description: description.into(),
        }
    }

    /// Write time in milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Event kind label, e.g. `"open"` or `"split"`.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Free-text description written with the event.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Presentation-only timestamp formatting, e.g.
    /// `"Mon, 3 Jun 2024 14:05:09"` in local time.
    pub fn timestamp_as_string(&self) -> String {
        Local
            .timestamp_millis_opt(self.timestamp)
            .single()
            .map(|dt| dt.format("%a, %-d %b %Y %H:%M:%S").to_string())
            .unwrap_or_else(|| self.timestamp.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let record = HistoryRecord::new(1730000000000, "open", "Region opened on server: host-1");
        assert_eq!(record.timestamp(), 1730000000000);
        assert_eq!(record.event(), "open");
        assert_eq!(record.description(), "Region opened on server: host-1");
    }

    #[test]
    fn test_timestamp_as_string_is_formatted() {
        let record = HistoryRecord::new(1730000000000, "open", "x");
        let formatted = record.timestamp_as_string();
        // Local-time rendering, so only check the shape: "Ddd, d Mon yyyy hh:mm:ss"
        assert!(formatted.contains("2024"));
        assert!(formatted.contains(','));
    }
}
