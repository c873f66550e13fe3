//! # HMM Model Tables
//!
//! The trained model: a transition table and an emission table, both
//! built once from a labeled corpus and immutable afterwards.

pub mod emission;
pub mod table;
pub mod transition;

pub use emission::EmissionModel;
pub use table::LogProbTable;
pub use transition::{START_STATE, TransitionModel};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A trained hidden Markov model.
///
/// Decode calls only read the tables, so one model can be shared freely
/// across threads once training is done.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HmmModel {
    /// Tag-to-tag transition log-probabilities.
    pub transitions: TransitionModel,
    /// Tag-to-word emission log-probabilities.
    pub emissions: EmissionModel,
}

impl HmmModel {
    /// Train a model from tag lines and the flat word sequence.
    ///
    /// `tag_lines` holds one sentence of tag tokens per entry;
    /// `observations` is the corresponding word sequence flattened across
    /// all sentences, in order.
    ///
    /// # Errors
    /// [`crate::HinshiError::AlignmentMismatch`] if the flattened tags and
    /// the observations differ in length.
    pub fn train(tag_lines: &[Vec<String>], observations: &[String]) -> Result<Self> {
        let transitions = TransitionModel::estimate(tag_lines);
        let states: Vec<String> = tag_lines.iter().flatten().cloned().collect();
        let emissions = EmissionModel::estimate(&states, observations)?;
        Ok(Self {
            transitions,
            emissions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_couples_both_tables() {
        let tag_lines = vec![
            vec!["N".to_string(), "V".to_string()],
            vec!["N".to_string(), "V".to_string()],
        ];
        let observations: Vec<String> = ["dog", "runs", "dog", "runs"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let model = HmmModel::train(&tag_lines, &observations).unwrap();
        assert!(model.transitions.successors(START_STATE).is_some());
        assert!(model.emissions.score("N", "dog").is_some());
    }

    #[test]
    fn test_train_propagates_alignment_mismatch() {
        let tag_lines = vec![vec!["N".to_string(), "V".to_string()]];
        let observations = vec!["dog".to_string()];
        assert!(HmmModel::train(&tag_lines, &observations).is_err());
    }
}
