//! Smoothed per-store throughput rates.

use crate::stats::rolling::RollingStats;
use crate::types::StoreStats;
use parking_lot::RwLock;

/// How many recent heartbeat intervals each rate window keeps.
pub const STORE_STATS_ROLLING_WINDOW: usize = 3;

/// Rolling throughput rates for one store.
///
/// All four windows live behind a single lock so a reader never sees a
/// half-applied heartbeat across the metrics. Every snapshot of a store
/// shares one instance of this bundle; it keeps advancing as heartbeats
/// arrive no matter which snapshot a caller holds.
#[derive(Debug)]
pub struct RollingStoreRates {
    inner: RwLock<RatesInner>,
}

#[derive(Debug)]
struct RatesInner {
    bytes_write: RollingStats,
    bytes_read: RollingStats,
    keys_write: RollingStats,
    keys_read: RollingStats,
}

impl RollingStoreRates {
    /// Create an empty rate bundle.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RatesInner {
                bytes_write: RollingStats::new(STORE_STATS_ROLLING_WINDOW),
                bytes_read: RollingStats::new(STORE_STATS_ROLLING_WINDOW),
                keys_write: RollingStats::new(STORE_STATS_ROLLING_WINDOW),
                keys_read: RollingStats::new(STORE_STATS_ROLLING_WINDOW),
            }),
        }
    }

    /// Fold one heartbeat report into the windows.
    ///
    /// A report covering an empty interval carries no rate information and
    /// is dropped whole; the four windows always advance in lockstep.
    pub fn observe(&self, stats: &StoreStats) {
        let interval = stats.interval.duration_secs();
        if interval == 0 {
            return;
        }

        let mut inner = self.inner.write();
        inner.bytes_write.add((stats.bytes_written / interval) as f64);
        inner.bytes_read.add((stats.bytes_read / interval) as f64);
        inner.keys_write.add((stats.keys_written / interval) as f64);
        inner.keys_read.add((stats.keys_read / interval) as f64);
    }

    /// Smoothed bytes written per second.
    pub fn bytes_write_rate(&self) -> f64 {
        self.inner.read().bytes_write.median()
    }

    /// Smoothed bytes read per second.
    pub fn bytes_read_rate(&self) -> f64 {
        self.inner.read().bytes_read.median()
    }

    /// Smoothed keys written per second.
    pub fn keys_write_rate(&self) -> f64 {
        self.inner.read().keys_write.median()
    }

    /// Smoothed keys read per second.
    pub fn keys_read_rate(&self) -> f64 {
        self.inner.read().keys_read.median()
    }
}

impl Default for RollingStoreRates {
    fn default() -> Self {
        Self::new()
    }
}
