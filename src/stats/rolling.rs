//! Fixed-size rolling sample windows.

use std::collections::VecDeque;

/// A sliding window over the most recent samples, summarized by median.
///
/// Heartbeat-derived rates are noisy: one late report halves a rate and the
/// next doubles it. The median of a short window shrugs off a single outlier
/// where a moving average would chase it.
#[derive(Debug, Clone)]
pub struct RollingStats {
    window: usize,
    samples: VecDeque<f64>,
}

impl RollingStats {
    /// Create a window holding at most `window` samples. A zero size is
    /// bumped to one so the window can always hold the latest sample.
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            samples: VecDeque::with_capacity(window),
        }
    }

    /// Append a sample, evicting the oldest one if the window is full.
    pub fn add(&mut self, sample: f64) {
        if self.samples.len() == self.window {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Median of the samples currently in the window, or zero if empty.
    pub fn median(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }

        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(f64::total_cmp);

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        }
    }

    /// Number of samples currently in the window.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window holds no samples yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
