//! Core types shared across the store registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store identifier in the cluster.
pub type StoreId = u64;

/// Lifecycle state of a store, as driven by the cluster operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreState {
    /// Serving reads and writes; participates in balancing.
    Up,
    /// Draining: still serving but being emptied for removal.
    Offline,
    /// Fully decommissioned; kept only so the id is never reused.
    Tombstone,
}

impl Default for StoreState {
    fn default() -> Self {
        StoreState::Up
    }
}

impl fmt::Display for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreState::Up => write!(f, "up"),
            StoreState::Offline => write!(f, "offline"),
            StoreState::Tombstone => write!(f, "tombstone"),
        }
    }
}

/// A single topology label, e.g. `zone=us-east-1`.
///
/// Keys are compared case-insensitively wherever labels are matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLabel {
    pub key: String,
    pub value: String,
}

impl StoreLabel {
    /// Create a new label.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Identity and placement metadata a store reports when it registers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreMeta {
    /// Unique store identifier.
    pub id: StoreId,
    /// Address the store serves peers on.
    pub address: String,
    /// Software version the store is running.
    pub version: String,
    /// Lifecycle state.
    pub state: StoreState,
    /// Topology labels, ordered from the widest tier to the narrowest.
    pub labels: Vec<StoreLabel>,
}

impl StoreMeta {
    /// Create metadata for a store at `address`, in the `Up` state with no
    /// labels.
    pub fn new(id: StoreId, address: impl Into<String>) -> Self {
        Self {
            id,
            address: address.into(),
            version: String::new(),
            state: StoreState::Up,
            labels: Vec::new(),
        }
    }

    /// Value of the label with the given key, matched case-insensitively.
    pub fn label_value(&self, key: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|label| label.key.eq_ignore_ascii_case(key))
            .map(|label| label.value.as_str())
    }
}

/// The heartbeat interval a statistics report covers, in seconds since the
/// Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInterval {
    pub start_secs: u64,
    pub end_secs: u64,
}

impl ReportInterval {
    /// Create an interval from epoch-second bounds.
    pub fn new(start_secs: u64, end_secs: u64) -> Self {
        Self {
            start_secs,
            end_secs,
        }
    }

    /// Length of the interval in whole seconds; zero when the bounds are
    /// inverted or equal.
    pub fn duration_secs(&self) -> u64 {
        self.end_secs.saturating_sub(self.start_secs)
    }
}

/// One heartbeat's worth of store statistics.
///
/// Sizes are in bytes; throughput counters cover only the report interval,
/// not the store's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Total disk capacity.
    pub capacity: u64,
    /// Disk space still free.
    pub available: u64,
    /// Disk space occupied by region data.
    pub used_size: u64,
    /// Bytes written during the interval.
    pub bytes_written: u64,
    /// Bytes read during the interval.
    pub bytes_read: u64,
    /// Keys written during the interval.
    pub keys_written: u64,
    /// Keys read during the interval.
    pub keys_read: u64,
    /// Whether the store reported itself too busy to accept new work.
    pub is_busy: bool,
    /// Snapshots currently being sent to other stores.
    pub sending_snap_count: u32,
    /// Snapshots currently being received.
    pub receiving_snap_count: u32,
    /// Snapshots currently being applied.
    pub applying_snap_count: u32,
    /// Epoch seconds at which the store process started.
    pub start_time: u64,
    /// The interval this report covers.
    pub interval: ReportInterval,
}

/// The kind of placement resource a scheduler balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Raft leaderships, balanced to spread read/write load.
    Leader,
    /// Region replicas, balanced to spread data volume.
    Region,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Leader => write!(f, "leader"),
            ResourceKind::Region => write!(f, "region"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_interval_duration() {
        assert_eq!(ReportInterval::new(100, 110).duration_secs(), 10);
        assert_eq!(ReportInterval::new(100, 100).duration_secs(), 0);
        // Inverted bounds from a skewed clock must not underflow.
        assert_eq!(ReportInterval::new(110, 100).duration_secs(), 0);
    }

    #[test]
    fn test_store_state_display() {
        assert_eq!(StoreState::Up.to_string(), "up");
        assert_eq!(StoreState::Offline.to_string(), "offline");
        assert_eq!(StoreState::Tombstone.to_string(), "tombstone");
        assert_eq!(StoreState::default(), StoreState::Up);
    }

    #[test]
    fn test_meta_label_value_is_case_insensitive() {
        let mut meta = StoreMeta::new(1, "10.0.0.1:20160");
        meta.labels = vec![
            StoreLabel::new("zone", "us-east-1"),
            StoreLabel::new("Rack", "r7"),
        ];
        assert_eq!(meta.label_value("ZONE"), Some("us-east-1"));
        assert_eq!(meta.label_value("rack"), Some("r7"));
        assert_eq!(meta.label_value("host"), None);
    }

    #[test]
    fn test_resource_kind_display() {
        assert_eq!(ResourceKind::Leader.to_string(), "leader");
        assert_eq!(ResourceKind::Region.to_string(), "region");
    }
}
