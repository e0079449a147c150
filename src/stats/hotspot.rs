//! Hot-region report shapes.
//!
//! Hotspot detection itself lives elsewhere; these types only carry its
//! output, grouped by store, in the shape the status API serves.

use crate::types::StoreId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flow statistics for one region that crossed the hotspot threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionStat {
    /// The region's identifier.
    pub region_id: u64,
    /// Bytes of flow observed over the reporting window.
    pub flow_bytes: u64,
    /// Consecutive refreshes the region has stayed hot.
    pub hot_degree: i64,
    /// Epoch seconds of the last refresh.
    pub last_update_secs: u64,
}

/// Aggregate hotspot statistics for one store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotRegionsStat {
    /// Sum of `flow_bytes` across the hot regions.
    pub total_flow_bytes: u64,
    /// Number of hot regions on the store.
    pub regions_count: usize,
    /// Per-region breakdown.
    #[serde(rename = "statistics")]
    pub regions_stat: Vec<RegionStat>,
}

/// Hotspot statistics keyed by store id.
pub type StoreHotRegionsStat = HashMap<StoreId, HotRegionsStat>;

/// Hotspot report split by the role each store plays for the hot regions.
///
/// A store can run hot as a replica holder and as a leader independently;
/// the status API reports both views side by side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreHotRegionInfos {
    pub as_peer: StoreHotRegionsStat,
    pub as_leader: StoreHotRegionsStat,
}
