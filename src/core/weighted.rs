//! Cumulative-weight table for biased random selection.

use rand::Rng;

/// A weighted-choice table over discrete entries.
///
/// Entries are stored alongside a running prefix sum of their weights; a
/// pick draws a uniform value in `[0, total)` and binary-searches the prefix
/// sums. Pick probability is proportional to weight.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<T>,
    prefix: Vec<f64>,
    total: f64,
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            prefix: Vec::new(),
            total: 0.0,
        }
    }

    /// Add an entry with the given weight. Non-positive weights are ignored.
    pub fn push(&mut self, entry: T, weight: f64) {
        if weight <= 0.0 {
            return;
        }
        self.entries.push(entry);
        self.total += weight;
        self.prefix.push(self.total);
    }

    /// Pick an entry at random, biased by weight. `None` if the table is empty.
    pub fn pick<'a>(&'a self, rng: &mut impl Rng) -> Option<&'a T> {
        if self.entries.is_empty() {
            return None;
        }
        let roll = rng.gen_range(0.0..self.total);
        let idx = self.prefix.partition_point(|&p| p <= roll);
        // partition_point can only reach len if roll >= total, which the
        // half-open range rules out; clamp anyway for float safety.
        Some(&self.entries[idx.min(self.entries.len() - 1)])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.total
    }
}
