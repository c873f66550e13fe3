//! # Conditional Log-Probability Tables
//!
//! The shared table type backing both the transition and the emission
//! model: counts are accumulated per row, then each row is normalized by
//! its sum and stored as natural logarithms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw co-occurrence counts keyed by (row, outcome).
pub(crate) type CountTable = BTreeMap<String, BTreeMap<String, u64>>;

/// A table of conditional log-probabilities.
///
/// Rows are conditioning keys (a source state), columns are outcomes (a
/// destination state, or an observation). Every row is a proper estimated
/// categorical distribution over the outcomes observed in training: the
/// exponentials of its entries sum to 1.0. Outcomes never recorded for a
/// row are absent rather than stored as explicit zeros.
///
/// Ordered maps keep row and outcome iteration deterministic, which pins
/// down the decoder's tie-break behavior across runs and platforms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogProbTable {
    rows: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LogProbTable {
    /// Build a table from raw counts: each entry becomes ln(count / row sum).
    ///
    /// Counts are at least 1 wherever a key exists, so the logarithm is
    /// always finite.
    pub(crate) fn from_counts(counts: CountTable) -> Self {
        let mut rows = BTreeMap::new();
        for (key, inner) in counts {
            let sum: u64 = inner.values().sum();
            let row: BTreeMap<String, f64> = inner
                .into_iter()
                .map(|(outcome, count)| (outcome, (count as f64 / sum as f64).ln()))
                .collect();
            rows.insert(key, row);
        }
        Self { rows }
    }

    /// Outcomes recorded for `key`, in outcome order.
    pub fn row(&self, key: &str) -> Option<&BTreeMap<String, f64>> {
        self.rows.get(key)
    }

    /// Log-probability of `outcome` conditioned on `key`, if recorded.
    pub fn score(&self, key: &str, outcome: &str) -> Option<f64> {
        self.rows.get(key)?.get(outcome).copied()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, f64>)> {
        self.rows.iter()
    }
}
