//! Immutable store snapshots: field access, health classification, and the
//! placement-cost scores.

use crate::config::{HealthConfig, ScheduleConfig};
use crate::stats::RollingStoreRates;
use crate::types::{ResourceKind, StoreId, StoreLabel, StoreMeta, StoreState, StoreStats};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Floor for configured weights used as score denominators. Keeps a zero or
/// negative weight from producing an infinite or undefined score.
const MIN_WEIGHT: f64 = 1e-6;

/// Constant dominating the low-space region score. A store near exhaustion
/// scores close to this no matter how little logical data it holds.
const MAX_SCORE: f64 = 1024.0 * 1024.0 * 1024.0;

const BYTES_PER_MIB: f64 = (1 << 20) as f64;

/// A point-in-time snapshot of one store.
///
/// Snapshots are immutable once published: every update clones the current
/// value with overrides (the `with_*` methods) and republishes the clone
/// through the registry, so a reader holding a reference always sees one
/// consistent moment. Clones share the metadata, the latest stats report,
/// and the rolling rate bundle by `Arc`; the rate bundle is internally
/// locked and keeps advancing under every snapshot of the store as
/// heartbeats arrive.
#[derive(Debug, Clone)]
pub struct StoreInfo {
    meta: Arc<StoreMeta>,
    stats: Arc<StoreStats>,
    blocked: bool,
    leader_count: usize,
    region_count: usize,
    leader_size: i64,
    region_size: i64,
    pending_peer_count: usize,
    leader_weight: f64,
    region_weight: f64,
    last_heartbeat: SystemTime,
    rates: Arc<RollingStoreRates>,
}

impl StoreInfo {
    /// Create the initial snapshot for a newly registered store. The store
    /// counts as never heard from until a heartbeat is recorded.
    pub fn new(meta: StoreMeta) -> Self {
        Self {
            meta: Arc::new(meta),
            stats: Arc::new(StoreStats::default()),
            blocked: false,
            leader_count: 0,
            region_count: 0,
            leader_size: 0,
            region_size: 0,
            pending_peer_count: 0,
            leader_weight: 1.0,
            region_weight: 1.0,
            last_heartbeat: UNIX_EPOCH,
            rates: Arc::new(RollingStoreRates::new()),
        }
    }

    /// Replace the metadata.
    pub fn with_meta(mut self, meta: StoreMeta) -> Self {
        self.meta = Arc::new(meta);
        self
    }

    /// Replace the statistics report.
    pub fn with_stats(mut self, stats: StoreStats) -> Self {
        self.stats = Arc::new(stats);
        self
    }

    /// Set the blocked flag.
    pub fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Set the leader count.
    pub fn with_leader_count(mut self, count: usize) -> Self {
        self.leader_count = count;
        self
    }

    /// Set the region count.
    pub fn with_region_count(mut self, count: usize) -> Self {
        self.region_count = count;
        self
    }

    /// Set the total leader size in MiB.
    pub fn with_leader_size(mut self, size: i64) -> Self {
        self.leader_size = size;
        self
    }

    /// Set the total region size in MiB.
    pub fn with_region_size(mut self, size: i64) -> Self {
        self.region_size = size;
        self
    }

    /// Set the pending peer count.
    pub fn with_pending_peer_count(mut self, count: usize) -> Self {
        self.pending_peer_count = count;
        self
    }

    /// Set the leader weight.
    pub fn with_leader_weight(mut self, weight: f64) -> Self {
        self.leader_weight = weight;
        self
    }

    /// Set the region weight.
    pub fn with_region_weight(mut self, weight: f64) -> Self {
        self.region_weight = weight;
        self
    }

    /// Set the last heartbeat time.
    pub fn with_last_heartbeat(mut self, at: SystemTime) -> Self {
        self.last_heartbeat = at;
        self
    }

    /// The store's identifier.
    pub fn id(&self) -> StoreId {
        self.meta.id
    }

    /// The address the store serves peers on.
    pub fn address(&self) -> &str {
        &self.meta.address
    }

    /// The software version the store reported.
    pub fn version(&self) -> &str {
        &self.meta.version
    }

    /// The store's lifecycle state.
    pub fn state(&self) -> StoreState {
        self.meta.state
    }

    /// The store's topology labels.
    pub fn labels(&self) -> &[StoreLabel] {
        &self.meta.labels
    }

    /// The full metadata record.
    pub fn meta(&self) -> &StoreMeta {
        &self.meta
    }

    /// The latest statistics report.
    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }

    /// The rolling rate bundle shared by all snapshots of this store.
    pub fn rates(&self) -> &RollingStoreRates {
        &self.rates
    }

    /// Whether the store is serving.
    pub fn is_up(&self) -> bool {
        self.state() == StoreState::Up
    }

    /// Whether the store is draining for removal.
    pub fn is_offline(&self) -> bool {
        self.state() == StoreState::Offline
    }

    /// Whether the store is decommissioned.
    pub fn is_tombstone(&self) -> bool {
        self.state() == StoreState::Tombstone
    }

    /// Whether the store is administratively excluded from balancing,
    /// independent of its health.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Total disk capacity in bytes.
    pub fn capacity(&self) -> u64 {
        self.stats.capacity
    }

    /// Free disk space in bytes.
    pub fn available(&self) -> u64 {
        self.stats.available
    }

    /// Disk space occupied by region data, in bytes.
    pub fn used_size(&self) -> u64 {
        self.stats.used_size
    }

    /// Whether the store reported itself too busy for new work.
    pub fn is_busy(&self) -> bool {
        self.stats.is_busy
    }

    /// Snapshots currently being sent to other stores.
    pub fn sending_snap_count(&self) -> u32 {
        self.stats.sending_snap_count
    }

    /// Snapshots currently being received.
    pub fn receiving_snap_count(&self) -> u32 {
        self.stats.receiving_snap_count
    }

    /// Snapshots currently being applied.
    pub fn applying_snap_count(&self) -> u32 {
        self.stats.applying_snap_count
    }

    /// Number of leaders on the store.
    pub fn leader_count(&self) -> usize {
        self.leader_count
    }

    /// Number of region replicas on the store.
    pub fn region_count(&self) -> usize {
        self.region_count
    }

    /// Total leader size in MiB.
    pub fn leader_size(&self) -> i64 {
        self.leader_size
    }

    /// Total region size in MiB.
    pub fn region_size(&self) -> i64 {
        self.region_size
    }

    /// Number of peers with pending raft work on the store.
    pub fn pending_peer_count(&self) -> usize {
        self.pending_peer_count
    }

    /// Configured leader weight, as stored.
    pub fn leader_weight(&self) -> f64 {
        self.leader_weight
    }

    /// Configured region weight, as stored.
    pub fn region_weight(&self) -> f64 {
        self.region_weight
    }

    /// When the last heartbeat was recorded. `UNIX_EPOCH` means never.
    pub fn last_heartbeat(&self) -> SystemTime {
        self.last_heartbeat
    }

    /// The store process start time, as reported. A start time too large
    /// to represent clamps to the last heartbeat, so `uptime` reads zero.
    pub fn start_ts(&self) -> SystemTime {
        UNIX_EPOCH
            .checked_add(Duration::from_secs(self.stats.start_time))
            .unwrap_or(self.last_heartbeat)
    }

    /// Time elapsed since the last heartbeat.
    pub fn down_time(&self) -> Duration {
        SystemTime::now()
            .duration_since(self.last_heartbeat)
            .unwrap_or_default()
    }

    /// Time between process start and the last heartbeat. Zero when the
    /// reported start time postdates the heartbeat, which happens with
    /// skewed clocks or a stale report.
    pub fn uptime(&self) -> Duration {
        self.last_heartbeat
            .duration_since(self.start_ts())
            .unwrap_or_default()
    }

    /// Whether heartbeats have been missing long enough to suspect a brief
    /// network or process hiccup. The threshold itself is not disconnected;
    /// silence must exceed it.
    pub fn is_disconnected(&self, health: &HealthConfig) -> bool {
        self.down_time() > health.disconnect_timeout
    }

    /// Whether heartbeats have been missing long enough to suspect real
    /// failure.
    pub fn is_unhealthy(&self, health: &HealthConfig) -> bool {
        self.down_time() > health.unhealthy_timeout
    }

    /// Fraction of capacity still free. Zero capacity reads as zero ratio:
    /// a store that has not reported disk figures has no room to offer.
    pub fn available_ratio(&self) -> f64 {
        if self.capacity() == 0 {
            return 0.0;
        }
        self.available() as f64 / self.capacity() as f64
    }

    /// Whether free space has fallen below the low-space threshold. A store
    /// with no disk figures yet reads ratio zero and is flagged: no room
    /// reported means no room to offer.
    pub fn is_low_space(&self, low_space_ratio: f64) -> bool {
        self.available_ratio() < 1.0 - low_space_ratio
    }

    /// Cost of holding the current leaders plus a hypothetical change of
    /// `delta` MiB: linear in size, adjusted by the leader weight.
    pub fn leader_score(&self, delta: i64) -> f64 {
        (self.leader_size + delta) as f64 / self.leader_weight.max(MIN_WEIGHT)
    }

    /// Cost of holding the current regions plus a hypothetical change of
    /// `delta` MiB.
    ///
    /// The score is a continuous piecewise function of the projected free
    /// space. While space is ample it is simply the logical size, so the
    /// scheduler balances by data volume. Once free space falls under
    /// `low_space_ratio` the score is dominated by remaining space, so
    /// near-full stores get evacuated no matter how little they hold. In
    /// between, a straight line through the two regime boundary points
    /// keeps the function continuous at both seams.
    pub fn region_score(&self, high_space_ratio: f64, low_space_ratio: f64, delta: i64) -> f64 {
        let capacity = self.capacity() as f64 / BYTES_PER_MIB;
        let available = self.available() as f64 / BYTES_PER_MIB;
        let used = self.used_size() as f64 / BYTES_PER_MIB;
        let region_size = self.region_size as f64;
        let delta = delta as f64;

        // Reported region size is logical; used size is physical after
        // compression. Their ratio converts a region-size delta into a
        // used-space delta. An empty store has no meaningful ratio yet.
        let amplification = if self.used_size() == 0 || self.region_size == 0 {
            1.0
        } else {
            region_size / used
        };

        // Free-space thresholds separating the three regimes.
        let high_space_bound = (1.0 - high_space_ratio) * capacity;
        let low_space_bound = (1.0 - low_space_ratio) * capacity;

        let projected_available = available - delta / amplification;
        let score = if projected_available >= high_space_bound {
            region_size + delta
        } else if projected_available <= low_space_bound {
            MAX_SCORE - projected_available
        } else {
            // The seam sizes follow from capacity accounting: space held by
            // files outside region data is fixed, so free space hits a bound
            // exactly when the region size is (used + available - bound)
            // times the amplification.
            let x1 = (used + available - high_space_bound) * amplification;
            let y1 = x1;
            let x2 = (used + available - low_space_bound) * amplification;
            let y2 = MAX_SCORE - low_space_bound;
            let k = (y2 - y1) / (x2 - x1);
            let b = y1 - k * x1;
            k * (region_size + delta) + b
        };

        score / self.region_weight.max(MIN_WEIGHT)
    }

    /// Count of the given resource on the store.
    pub fn resource_count(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Leader => self.leader_count,
            ResourceKind::Region => self.region_count,
        }
    }

    /// Total size of the given resource in MiB.
    pub fn resource_size(&self, kind: ResourceKind) -> i64 {
        match kind {
            ResourceKind::Leader => self.leader_size,
            ResourceKind::Region => self.region_size,
        }
    }

    /// Placement cost of the given resource after a hypothetical change of
    /// `delta` MiB, with the region regimes taken from `config`.
    pub fn resource_score(&self, kind: ResourceKind, config: &ScheduleConfig, delta: i64) -> f64 {
        match kind {
            ResourceKind::Leader => self.leader_score(delta),
            ResourceKind::Region => {
                self.region_score(config.high_space_ratio, config.low_space_ratio, delta)
            }
        }
    }

    /// Effective weight for the given resource, floored so it is safe to
    /// divide by.
    pub fn resource_weight(&self, kind: ResourceKind) -> f64 {
        let weight = match kind {
            ResourceKind::Leader => self.leader_weight,
            ResourceKind::Region => self.region_weight,
        };
        if weight <= 0.0 {
            MIN_WEIGHT
        } else {
            weight
        }
    }

    /// Value of the topology label with the given key, matched
    /// case-insensitively.
    pub fn label_value(&self, key: &str) -> Option<&str> {
        self.meta.label_value(key)
    }

    /// Index of the first topology tier at which this store and `other`
    /// live in different locations, walking `label_keys` from the widest
    /// tier down. `None` means the stores share a location as far as the
    /// keys can tell; a label missing or empty on either side counts as
    /// matching at that tier, so incomplete labeling is not read as a
    /// difference.
    pub fn compare_location<S: AsRef<str>>(
        &self,
        other: &StoreInfo,
        label_keys: &[S],
    ) -> Option<usize> {
        for (tier, key) in label_keys.iter().enumerate() {
            let own = self.label_value(key.as_ref()).filter(|value| !value.is_empty());
            let theirs = other.label_value(key.as_ref()).filter(|value| !value.is_empty());
            if let (Some(own), Some(theirs)) = (own, theirs) {
                if !own.eq_ignore_ascii_case(theirs) {
                    return Some(tier);
                }
            }
        }
        None
    }

    /// Merge `incoming` labels over the store's current ones. Same-key
    /// entries (case-insensitive) are overridden in place keeping their
    /// original key spelling, new keys are appended, and untouched entries
    /// keep their order.
    pub fn merge_labels(&self, incoming: Vec<StoreLabel>) -> Vec<StoreLabel> {
        let mut merged = self.meta.labels.clone();
        for label in incoming {
            match merged
                .iter_mut()
                .find(|existing| existing.key.eq_ignore_ascii_case(&label.key))
            {
                Some(existing) => existing.value = label.value,
                None => merged.push(label),
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReportInterval;

    fn stats_mib(capacity: u64, available: u64, used: u64) -> StoreStats {
        StoreStats {
            capacity: capacity << 20,
            available: available << 20,
            used_size: used << 20,
            ..Default::default()
        }
    }

    fn store_with(stats: StoreStats, region_size: i64) -> StoreInfo {
        StoreInfo::new(StoreMeta::new(1, "10.0.0.1:20160"))
            .with_stats(stats)
            .with_region_size(region_size)
    }

    fn labeled_store(id: StoreId, labels: &[(&str, &str)]) -> StoreInfo {
        let mut meta = StoreMeta::new(id, "10.0.0.1:20160");
        meta.labels = labels
            .iter()
            .map(|(k, v)| StoreLabel::new(*k, *v))
            .collect();
        StoreInfo::new(meta)
    }

    #[test]
    fn test_leader_score_is_weight_adjusted() {
        let store = StoreInfo::new(StoreMeta::new(1, "a"))
            .with_leader_size(100)
            .with_leader_weight(2.0);
        assert_eq!(store.leader_score(0), 50.0);
        assert_eq!(store.leader_score(20), 60.0);
        assert_eq!(store.leader_score(-40), 30.0);
    }

    #[test]
    fn test_zero_weight_never_divides_by_zero() {
        let store = StoreInfo::new(StoreMeta::new(1, "a"))
            .with_leader_size(100)
            .with_leader_weight(0.0);
        let score = store.leader_score(0);
        assert!(score.is_finite());
        assert_eq!(score, 100.0 / 1e-6);
    }

    #[test]
    fn test_resource_weight_floor() {
        let store = StoreInfo::new(StoreMeta::new(1, "a"))
            .with_leader_weight(0.0)
            .with_region_weight(-1.5);
        assert_eq!(store.resource_weight(ResourceKind::Leader), 1e-6);
        assert_eq!(store.resource_weight(ResourceKind::Region), 1e-6);

        let store = store.with_leader_weight(0.5);
        assert_eq!(store.resource_weight(ResourceKind::Leader), 0.5);
    }

    #[test]
    fn test_region_score_high_space_regime() {
        // 900 MiB free out of 1000 leaves the store comfortably in the
        // high-space regime, so the score is just the logical size.
        let store = store_with(stats_mib(1000, 900, 50), 40);
        assert_eq!(store.region_score(0.8, 0.1, 0), 40.0);
        assert_eq!(store.region_score(0.8, 0.1, 10), 50.0);
    }

    #[test]
    fn test_region_score_low_space_regime() {
        let store = store_with(stats_mib(1000, 50, 900), 900);
        // Bounds are 400 and 200 MiB free; 50 MiB free is deep in the
        // low-space regime.
        let score = store.region_score(0.6, 0.8, 0);
        assert_eq!(score, MAX_SCORE - 50.0);

        // Less free space scores higher still.
        let fuller = store_with(stats_mib(1000, 10, 940), 940);
        assert!(fuller.region_score(0.6, 0.8, 0) > score);
    }

    #[test]
    fn test_region_score_continuous_at_both_seams() {
        // amplification = 600 / 300 = 2; bounds at 400 and 200 MiB free.
        let store = store_with(stats_mib(1000, 600, 300), 600);
        let (high, low) = (0.6, 0.8);

        // The transition line recomputed here from the same boundary pairs.
        let amplification = 2.0;
        let x1 = (300.0 + 600.0 - 400.0) * amplification;
        let y1 = x1;
        let x2 = (300.0 + 600.0 - 200.0) * amplification;
        let y2 = MAX_SCORE - 200.0;
        let k = (y2 - y1) / (x2 - x1);
        let b = y1 - k * x1;
        let line = |size: f64| k * size + b;

        // delta = 400 projects free space exactly onto the high bound: the
        // high-space formula answers, and the line must agree.
        let at_high_seam = store.region_score(high, low, 400);
        assert_eq!(at_high_seam, 600.0 + 400.0);
        assert!((at_high_seam - line(1000.0)).abs() < 1e-3);

        // delta = 800 projects exactly onto the low bound.
        let at_low_seam = store.region_score(high, low, 800);
        assert_eq!(at_low_seam, MAX_SCORE - 200.0);
        assert!((at_low_seam - line(1400.0)).abs() < 1e-3);

        // Inside the transition the line itself answers, and the score
        // climbs monotonically toward the low-space values.
        let mid = store.region_score(high, low, 600);
        assert!((mid - line(1200.0)).abs() < 1e-3);
        assert!(at_high_seam < mid && mid < at_low_seam);
    }

    #[test]
    fn test_region_score_empty_store() {
        // No used space and no regions: amplification defaults to 1.
        let store = store_with(stats_mib(1000, 1000, 0), 0);
        let score = store.region_score(0.6, 0.8, 10);
        assert!(score.is_finite());
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_region_score_no_regions_on_used_disk() {
        // Regions not registered yet but the disk already holds data. The
        // ratio would be zero; it must fall back to 1 so a nonzero delta
        // cannot produce an infinite projection.
        let store = store_with(stats_mib(1000, 500, 400), 0);
        assert!(store.region_score(0.6, 0.8, 100).is_finite());
        assert!(store.region_score(0.6, 0.8, -100).is_finite());
    }

    #[test]
    fn test_available_ratio_zero_capacity() {
        let store = StoreInfo::new(StoreMeta::new(1, "a"));
        assert_eq!(store.available_ratio(), 0.0);
        // Zero ratio is below any threshold: a store that has never
        // reported disk figures counts as out of space.
        assert!(store.is_low_space(0.8));
    }

    #[test]
    fn test_is_low_space() {
        let low = store_with(stats_mib(1000, 100, 850), 800);
        assert!(low.is_low_space(0.8));

        let roomy = store_with(stats_mib(1000, 500, 450), 400);
        assert!(!roomy.is_low_space(0.8));
    }

    #[test]
    fn test_resource_accessors_dispatch_by_kind() {
        let config = ScheduleConfig::default();
        let store = StoreInfo::new(StoreMeta::new(1, "a"))
            .with_leader_count(3)
            .with_region_count(11)
            .with_leader_size(30)
            .with_region_size(110);

        assert_eq!(store.resource_count(ResourceKind::Leader), 3);
        assert_eq!(store.resource_count(ResourceKind::Region), 11);
        assert_eq!(store.resource_size(ResourceKind::Leader), 30);
        assert_eq!(store.resource_size(ResourceKind::Region), 110);
        assert_eq!(
            store.resource_score(ResourceKind::Leader, &config, 0),
            store.leader_score(0)
        );
        assert_eq!(
            store.resource_score(ResourceKind::Region, &config, 0),
            store.region_score(config.high_space_ratio, config.low_space_ratio, 0)
        );
    }

    #[test]
    fn test_compare_location() {
        let keys = ["zone", "rack"];
        let a = labeled_store(1, &[("zone", "a"), ("rack", "1")]);
        let b = labeled_store(2, &[("zone", "a"), ("rack", "2")]);
        assert_eq!(a.compare_location(&b, &keys), Some(1));

        let c = labeled_store(3, &[("zone", "b"), ("rack", "1")]);
        assert_eq!(a.compare_location(&c, &keys), Some(0));

        let twin = labeled_store(4, &[("zone", "A"), ("rack", "1")]);
        assert_eq!(a.compare_location(&twin, &keys), None);

        // A missing label matches at its tier.
        let unlabeled = labeled_store(5, &[("zone", "a")]);
        assert_eq!(a.compare_location(&unlabeled, &keys), None);

        // An empty value reads as unset, same as a missing label.
        let blank = labeled_store(6, &[("zone", ""), ("rack", "1")]);
        assert_eq!(a.compare_location(&blank, &keys), None);
        let blank_but_far = labeled_store(7, &[("zone", ""), ("rack", "2")]);
        assert_eq!(a.compare_location(&blank_but_far, &keys), Some(1));
    }

    #[test]
    fn test_merge_labels() {
        let store = labeled_store(1, &[("zone", "a"), ("disk", "ssd")]);
        let merged = store.merge_labels(vec![
            StoreLabel::new("ZONE", "b"),
            StoreLabel::new("host", "h1"),
        ]);
        // Overridden in place with the original key spelling kept.
        assert_eq!(merged[0], StoreLabel::new("zone", "b"));
        assert_eq!(merged[1], StoreLabel::new("disk", "ssd"));
        assert_eq!(merged[2], StoreLabel::new("host", "h1"));
    }

    #[test]
    fn test_health_thresholds_are_strict() {
        let health = HealthConfig::default();
        let now = SystemTime::now();

        let fresh = StoreInfo::new(StoreMeta::new(1, "a"))
            .with_last_heartbeat(now - Duration::from_secs(19));
        assert!(!fresh.is_disconnected(&health));

        let quiet = StoreInfo::new(StoreMeta::new(1, "a"))
            .with_last_heartbeat(now - Duration::from_secs(21));
        assert!(quiet.is_disconnected(&health));
        assert!(!quiet.is_unhealthy(&health));

        let silent = StoreInfo::new(StoreMeta::new(1, "a"))
            .with_last_heartbeat(now - Duration::from_secs(11 * 60));
        assert!(silent.is_disconnected(&health));
        assert!(silent.is_unhealthy(&health));

        // Never heard from at all.
        let never = StoreInfo::new(StoreMeta::new(1, "a"));
        assert!(never.is_disconnected(&health));
        assert!(never.is_unhealthy(&health));
    }

    #[test]
    fn test_uptime_clamps_clock_skew() {
        let now = SystemTime::now();
        let now_secs = now.duration_since(UNIX_EPOCH).unwrap().as_secs();

        let store = StoreInfo::new(StoreMeta::new(1, "a"))
            .with_stats(StoreStats {
                start_time: now_secs - 500,
                ..Default::default()
            })
            .with_last_heartbeat(now);
        let uptime = store.uptime().as_secs();
        assert!((499..=501).contains(&uptime));

        // Start time claimed to be in the future: clamp, never go negative.
        let store = StoreInfo::new(StoreMeta::new(1, "a"))
            .with_stats(StoreStats {
                start_time: now_secs + 1000,
                ..Default::default()
            })
            .with_last_heartbeat(now);
        assert_eq!(store.uptime(), Duration::ZERO);
    }

    #[test]
    fn test_garbage_start_time_never_panics() {
        // u64::MAX seconds does not fit in a SystemTime; readers get the
        // clamped value instead of an overflow panic.
        let store = StoreInfo::new(StoreMeta::new(1, "a"))
            .with_stats(StoreStats {
                start_time: u64::MAX,
                ..Default::default()
            })
            .with_last_heartbeat(SystemTime::now());
        assert_eq!(store.start_ts(), store.last_heartbeat());
        assert_eq!(store.uptime(), Duration::ZERO);
    }

    #[test]
    fn test_snapshots_share_rate_bundle() {
        let original = StoreInfo::new(StoreMeta::new(1, "a"));
        let republished = original.clone().with_leader_count(5);

        original.rates().observe(&StoreStats {
            bytes_written: 1000,
            interval: ReportInterval::new(0, 10),
            ..Default::default()
        });

        // The clone sees the rate recorded through the original.
        assert_eq!(republished.rates().bytes_write_rate(), 100.0);
        assert_eq!(republished.leader_count(), 5);
        assert_eq!(original.leader_count(), 0);
    }

    #[test]
    fn test_state_predicates() {
        let mut meta = StoreMeta::new(1, "a");
        meta.state = StoreState::Offline;
        let store = StoreInfo::new(meta);
        assert!(store.is_offline());
        assert!(!store.is_up());
        assert!(!store.is_tombstone());
        assert!(!store.is_blocked());
        assert!(store.clone().with_blocked(true).is_blocked());
    }
}
