//! # Transition Model
//!
//! Estimates the probability of moving from one tag to the next between
//! adjacent sentence positions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::table::{CountTable, LogProbTable};

/// Synthetic start-of-sequence state. It is prepended to every training
/// line and seeds the decode frontier, but never appears in a decoded path.
pub const START_STATE: &str = "#";

/// Log-probabilities of tag-to-tag transitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionModel {
    table: LogProbTable,
}

impl TransitionModel {
    /// Estimate transition log-probabilities from lines of tag tokens.
    ///
    /// Each line gets [`START_STATE`] prepended, then every adjacent
    /// (current, next) pair is counted; rows are normalized independently.
    /// A tag never observed with a successor has no row at all; the
    /// decoder treats such a tag as a dead end, not an error.
    pub fn estimate(tag_lines: &[Vec<String>]) -> Self {
        let mut counts = CountTable::new();
        for line in tag_lines {
            let mut current = START_STATE;
            for next in line {
                *counts
                    .entry(current.to_string())
                    .or_default()
                    .entry(next.clone())
                    .or_insert(0) += 1;
                current = next;
            }
        }
        Self {
            table: LogProbTable::from_counts(counts),
        }
    }

    /// Outgoing transitions of `state`, in destination order.
    pub fn successors(&self, state: &str) -> Option<&BTreeMap<String, f64>> {
        self.table.row(state)
    }

    /// The underlying log-probability table.
    pub fn table(&self) -> &LogProbTable {
        &self.table
    }
}
