//! # Emission Model
//!
//! Estimates the probability of a tag producing a given word.

use serde::{Deserialize, Serialize};

use crate::error::{HinshiError, Result};
use crate::model::table::{CountTable, LogProbTable};

/// Log-probabilities of tag-to-word emissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionModel {
    table: LogProbTable,
}

impl EmissionModel {
    /// Estimate emission log-probabilities from two aligned sequences.
    ///
    /// `states[i]` is the hidden tag that produced `observations[i]`.
    /// Observations are folded to lowercase before counting, and each
    /// tag's row is normalized independently.
    ///
    /// # Errors
    /// [`HinshiError::AlignmentMismatch`] if the sequences differ in
    /// length. This is a caller contract violation; nothing is truncated
    /// and no partial model is returned.
    pub fn estimate(states: &[String], observations: &[String]) -> Result<Self> {
        if states.len() != observations.len() {
            return Err(HinshiError::AlignmentMismatch {
                states: states.len(),
                observations: observations.len(),
            });
        }

        let mut counts = CountTable::new();
        for (state, observation) in states.iter().zip(observations) {
            *counts
                .entry(state.clone())
                .or_default()
                .entry(observation.to_lowercase())
                .or_insert(0) += 1;
        }
        Ok(Self {
            table: LogProbTable::from_counts(counts),
        })
    }

    /// Log-probability that `state` emits `observation`.
    ///
    /// The observation is expected to be case-folded already; absence
    /// means the pair was never seen in training.
    pub fn score(&self, state: &str, observation: &str) -> Option<f64> {
        self.table.score(state, observation)
    }

    /// The underlying log-probability table.
    pub fn table(&self) -> &LogProbTable {
        &self.table
    }
}
