//! One-shot "reveal on scroll" bookkeeping.
//!
//! A region is registered with a visibility threshold. The first
//! intersection sample at or above that threshold reveals it and drops its
//! registration; later samples are ignored and the region never hides
//! again. Tearing down a view releases every registration still pending.

use std::collections::HashMap;
use std::hash::Hash;

/// Browsers report the ratio at the exact crossing a hair below the
/// configured threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Visible-area fraction (0.0..=1.0) a region must reach to reveal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Generic page sections
    pub const SECTION: Threshold = Threshold(0.1);
    /// Statistics counters
    pub const COUNTER: Threshold = Threshold(0.5);

    pub fn new(ratio: f64) -> Self {
        Threshold(ratio.clamp(0.0, 1.0))
    }

    pub fn ratio(self) -> f64 {
        self.0
    }

    fn is_crossed_by(self, sample: IntersectionSample) -> bool {
        sample.is_intersecting && sample.ratio + RATIO_TOLERANCE >= self.0
    }
}

/// One visibility report for a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionSample {
    pub fn new(ratio: f64, is_intersecting: bool) -> Self {
        Self {
            ratio,
            is_intersecting,
        }
    }

    pub fn visible(ratio: f64) -> Self {
        Self::new(ratio, ratio > 0.0)
    }
}

/// State of a single region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTarget {
    threshold: Threshold,
    revealed: bool,
}

impl RevealTarget {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Apply a sample; true only on the crossing that reveals the region
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.revealed || !self.threshold.is_crossed_by(sample) {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Registrations for the regions of one view.
#[derive(Debug, Clone)]
pub struct RevealRegistry<K> {
    pending: HashMap<K, RevealTarget>,
    revealed: Vec<K>,
}

impl<K> Default for RevealRegistry<K> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
            revealed: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone + std::fmt::Debug> RevealRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Re-registering a pending key replaces its
    /// threshold; a key that has already revealed stays revealed.
    pub fn register(&mut self, key: K, threshold: Threshold) {
        if self.revealed.contains(&key) {
            return;
        }
        self.pending.insert(key, RevealTarget::new(threshold));
    }

    /// Feed a sample for `key`. Returns true when this sample reveals the
    /// region, after which the key is deregistered.
    pub fn observe(&mut self, key: &K, sample: IntersectionSample) -> bool {
        let Some(target) = self.pending.get_mut(key) else {
            return false;
        };

        if !target.observe(sample) {
            return false;
        }

        log::debug!("revealed {:?} at ratio {:.2}", key, sample.ratio);
        if let Some((key, _)) = self.pending.remove_entry(key) {
            self.revealed.push(key);
        }
        true
    }

    pub fn is_registered(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Release every pending registration, returning the released keys
    pub fn teardown(&mut self) -> Vec<K> {
        self.pending.drain().map(|(key, _)| key).collect()
    }
}
