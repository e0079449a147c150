//! Configuration types for health classification and placement scoring.

use std::time::Duration;

/// Default silence after which a store is considered disconnected.
///
/// Must stay comfortably above the heartbeat period so one delayed report
/// does not flap the store.
pub const STORE_DISCONNECT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default silence after which a store is considered unhealthy.
pub const STORE_UNHEALTHY_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Thresholds for classifying store health from heartbeat recency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthConfig {
    /// Silence beyond this marks the store disconnected.
    pub disconnect_timeout: Duration,

    /// Silence beyond this marks the store unhealthy.
    pub unhealthy_timeout: Duration,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            disconnect_timeout: STORE_DISCONNECT_TIMEOUT,
            unhealthy_timeout: STORE_UNHEALTHY_TIMEOUT,
        }
    }
}

impl HealthConfig {
    /// Create a config with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the disconnect threshold.
    pub fn with_disconnect_timeout(mut self, timeout: Duration) -> Self {
        self.disconnect_timeout = timeout;
        self
    }

    /// Set the unhealthy threshold.
    pub fn with_unhealthy_timeout(mut self, timeout: Duration) -> Self {
        self.unhealthy_timeout = timeout;
        self
    }
}

/// Tunables the placement scheduler feeds into store scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    /// Fraction of capacity that may be used before region scoring starts
    /// weighing remaining space, in (0, 1].
    pub high_space_ratio: f64,

    /// Fraction of capacity used at which a store counts as running out of
    /// space, in (0, 1]. Must exceed `high_space_ratio`.
    pub low_space_ratio: f64,

    /// Topology label keys ordered from the widest tier to the narrowest,
    /// e.g. `["zone", "rack", "host"]`.
    pub location_labels: Vec<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            high_space_ratio: 0.6,
            low_space_ratio: 0.8,
            location_labels: Vec::new(),
        }
    }
}

impl ScheduleConfig {
    /// Create a config with the default ratios and no location labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both space ratios.
    pub fn with_space_ratios(mut self, high: f64, low: f64) -> Self {
        self.high_space_ratio = high;
        self.low_space_ratio = low;
        self
    }

    /// Set the ordered topology label keys.
    pub fn with_location_labels(mut self, labels: Vec<String>) -> Self {
        self.location_labels = labels;
        self
    }
}
