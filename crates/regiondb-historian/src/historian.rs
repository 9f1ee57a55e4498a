//! Write and read paths of the region audit trail.

use std::cmp::Reverse;
use std::sync::Arc;

use regiondb_store::{VersionedStore, ALL_VERSIONS};

use crate::error::{HistorianError, Result};
use crate::event_kind::EventKind;
use crate::record::HistoryRecord;
use crate::region::RegionInfo;
use crate::settings::HistorianSettings;

/// Outcome of a history fetch.
///
/// A store failure during the per-kind fetch loop does not discard what was
/// already gathered; the records collected before the failure are returned
/// with the cause attached.
#[derive(Debug)]
pub struct HistoryFetch {
    /// Records gathered, newest first.
    pub records: Vec<HistoryRecord>,
    /// First store failure encountered, if any.
    pub error: Option<HistorianError>,
}

impl HistoryFetch {
    /// True when every event kind was fetched without error.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Records and retrieves the lifecycle history of regions.
///
/// Holds one shared handle to the versioned metadata store; the handle's
/// lifecycle is owned by the surrounding application. All operations are
/// synchronous and may block on store I/O.
pub struct RegionHistorian {
    store: Arc<dyn VersionedStore>,
    settings: HistorianSettings,
}

impl RegionHistorian {
    pub fn new(store: Arc<dyn VersionedStore>, settings: HistorianSettings) -> Self {
        log::debug!("Region historian is ready");
        Self { store, settings }
    }

    /// Appends one audit record, surfacing store failures to the caller.
    ///
    /// A `None` timestamp requests the store's write time. Appends against
    /// the reserved meta/root region are dropped and report `Ok(())`; that
    /// row must not accumulate audit columns.
    pub fn try_append(
        &self,
        kind: EventKind,
        region: &RegionInfo,
        description: &str,
        timestamp: Option<i64>,
    ) -> Result<()> {
        if region.is_meta() {
            return Ok(());
        }
        self.store.put(
            region.row_key(),
            kind.column_key(),
            description.as_bytes(),
            timestamp,
        )?;
        Ok(())
    }

    /// Fire-and-forget append: a store failure is logged, never propagated.
    /// Lifecycle operations must not fail because audit logging did.
    fn append(&self, kind: EventKind, region: &RegionInfo, description: String) {
        if let Err(e) = self.try_append(kind, region, &description, None) {
            log::warn!(
                "Unable to record '{}' for region {}: {}",
                description,
                region,
                e
            );
        }
    }

    /// Records the creation of a region.
    pub fn record_creation(&self, region: &RegionInfo) {
        self.append(EventKind::Creation, region, "Region creation".to_string());
    }

    /// Records that a region was opened on the given server host.
    pub fn record_open(&self, region: &RegionInfo, server_host: &str) {
        self.append(
            EventKind::Open,
            region,
            format!("Region opened on server: {}", server_host),
        );
    }

    /// Records a split under both daughter regions, naming the parent.
    pub fn record_split(
        &self,
        parent: &RegionInfo,
        daughter_a: &RegionInfo,
        daughter_b: &RegionInfo,
    ) {
        let description = format!("Region split from: {}", parent.name());
        for daughter in [daughter_a, daughter_b] {
            self.append(EventKind::Split, daughter, description.clone());
        }
    }

    /// Records a completed compaction. Only written when
    /// `record_maintenance_events` is enabled.
    pub fn record_compaction(&self, region: &RegionInfo, elapsed: &str) {
        if self.settings.record_maintenance_events {
            self.append(
                EventKind::Compaction,
                region,
                format!("Region compaction completed in {}", elapsed),
            );
        }
    }

    /// Records a completed memstore flush. Only written when
    /// `record_maintenance_events` is enabled.
    pub fn record_flush(&self, region: &RegionInfo, elapsed: &str) {
        if self.settings.record_maintenance_events {
            self.append(
                EventKind::Flush,
                region,
                format!("Region flush completed in {}", elapsed),
            );
        }
    }

    /// Records the assignment of a region to a server.
    pub fn record_assignment(&self, region: &RegionInfo, server_name: &str) {
        self.append(
            EventKind::Assignment,
            region,
            format!("Region assigned to server {}", server_name),
        );
    }

    /// Fetches every recorded event of every kind for a region.
    ///
    /// Records are merged across kinds and stably sorted newest first;
    /// records with equal timestamps keep their per-kind fetch order. The
    /// loop stops at the first store failure and returns whatever was
    /// gathered up to that point, with the cause attached.
    pub fn try_history(&self, region: &RegionInfo) -> HistoryFetch {
        let mut records = Vec::new();
        let mut error = None;

        for kind in EventKind::ALL {
            match self
                .store
                .get_versions(region.row_key(), kind.column_key(), ALL_VERSIONS)
            {
                Ok(versions) => {
                    for version in versions {
                        records.push(HistoryRecord::new(
                            version.timestamp,
                            kind.label(),
                            String::from_utf8_lossy(&version.value).into_owned(),
                        ));
                    }
                }
                Err(e) => {
                    error = Some(HistorianError::from(e));
                    break;
                }
            }
        }

        records.sort_by_key(|record| Reverse(record.timestamp()));
        HistoryFetch { records, error }
    }

    /// Fetches a region's history, logging any partial-fetch failure and
    /// returning the records that were gathered. Never fails; an unknown
    /// region yields an empty vec.
    pub fn history(&self, region: &RegionInfo) -> Vec<HistoryRecord> {
        let fetch = self.try_history(region);
        if let Some(e) = &fetch.error {
            log::warn!("Unable to retrieve full history for region {}: {}", region, e);
        }
        fetch.records
    }
}
