//! # Viterbi Decoding
//!
//! Recovers the most likely hidden tag sequence for a sentence, given a
//! trained [`HmmModel`], by a frontier-based dynamic program with
//! backpointer reconstruction.

use std::collections::BTreeMap;

use tracing::trace;

use crate::error::{HinshiError, Result};
use crate::model::{HmmModel, START_STATE};

/// Fallback log-score for a word a tag was never seen emitting.
pub const DEFAULT_UNSEEN_PENALTY: f64 = -100.0;

/// Viterbi decoder for HMM tag sequences.
#[derive(Debug, Clone)]
pub struct ViterbiDecoder {
    unseen_penalty: f64,
}

impl ViterbiDecoder {
    /// Create a decoder with the default unseen-emission penalty.
    pub fn new() -> Self {
        Self {
            unseen_penalty: DEFAULT_UNSEEN_PENALTY,
        }
    }

    /// Create a decoder with a custom penalty for unseen emissions.
    ///
    /// The useful magnitude depends on corpus scale, so the value is a
    /// parameter rather than a fixed constant.
    pub fn with_penalty(unseen_penalty: f64) -> Self {
        Self { unseen_penalty }
    }

    /// The log-score applied when a tag has no recorded emission for a word.
    pub fn unseen_penalty(&self) -> f64 {
        self.unseen_penalty
    }

    /// Decode the most likely tag sequence for `observations`.
    ///
    /// The expansion is sparse: each step only follows transitions out of
    /// tags currently on the frontier instead of scoring the full tag
    /// vocabulary as full-lattice Viterbi does. With a well-connected
    /// transition graph the two agree; a path through a tag that
    /// momentarily dropped off the frontier cannot be recovered.
    ///
    /// Observations are folded to lowercase before emission lookup. Words
    /// never seen in training score [`Self::unseen_penalty`] per candidate
    /// tag instead of failing. The returned path has one tag per
    /// observation; the start sentinel is never part of it. An empty input
    /// decodes to an empty path.
    ///
    /// # Errors
    /// [`HinshiError::FrontierExhausted`] if at some step no frontier tag
    /// has any outgoing transition. The error names the offending
    /// observation; the model stays valid for further decode calls.
    pub fn decode(&self, model: &HmmModel, observations: &[String]) -> Result<Vec<String>> {
        if observations.is_empty() {
            return Ok(Vec::new());
        }

        let mut frontier = BTreeMap::from([(START_STATE.to_string(), 0.0f64)]);
        let mut backtrack: Vec<BTreeMap<String, String>> = Vec::with_capacity(observations.len());

        for (index, raw) in observations.iter().enumerate() {
            let observation = raw.to_lowercase();
            let mut next_scores: BTreeMap<String, f64> = BTreeMap::new();
            let mut pointers: BTreeMap<String, String> = BTreeMap::new();

            for (current, &score) in &frontier {
                // A tag with no recorded successors contributes nothing.
                let Some(successors) = model.transitions.successors(current) else {
                    continue;
                };

                for (next, &transition_score) in successors {
                    let emission_score = match model.emissions.score(next, &observation) {
                        Some(s) => s,
                        None => {
                            trace!(tag = %next, word = %observation, "unseen emission");
                            self.unseen_penalty
                        }
                    };
                    let candidate = score + transition_score + emission_score;

                    // Strictly greater only: on a tie, the first source to
                    // reach the best score keeps the backpointer.
                    if next_scores
                        .get(next)
                        .is_none_or(|&best| candidate > best)
                    {
                        next_scores.insert(next.clone(), candidate);
                        pointers.insert(next.clone(), current.clone());
                    }
                }
            }

            if next_scores.is_empty() {
                return Err(HinshiError::FrontierExhausted { index, observation });
            }

            backtrack.push(pointers);
            frontier = next_scores;
        }

        Ok(backtrace(&frontier, &backtrack))
    }
}

impl Default for ViterbiDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the best terminal tag and walk the backpointers into a path.
///
/// The forward pass guarantees a non-empty frontier, one pointer map per
/// observation, and a recorded pointer for every frontier tag.
fn backtrace(frontier: &BTreeMap<String, f64>, backtrack: &[BTreeMap<String, String>]) -> Vec<String> {
    let mut best: Option<(&String, f64)> = None;
    for (state, &score) in frontier {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((state, score));
        }
    }
    let (terminal, _) = best.expect("frontier is non-empty after a successful forward pass");

    let mut path = Vec::with_capacity(backtrack.len());
    let mut current = terminal;
    path.push(current.clone());
    // The first map only points back to the start sentinel, which is not
    // part of the output.
    for pointers in backtrack.iter().skip(1).rev() {
        current = pointers
            .get(current)
            .expect("every frontier tag has a backpointer");
        path.push(current.clone());
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_lines(lines: &[&[&str]]) -> Vec<Vec<String>> {
        lines
            .iter()
            .map(|line| line.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    fn words(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|w| w.to_string()).collect()
    }

    fn dog_runs_model() -> HmmModel {
        HmmModel::train(
            &tag_lines(&[&["N", "V"], &["N", "V"]]),
            &words(&["dog", "runs", "dog", "runs"]),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_simple_sentence() {
        let model = dog_runs_model();
        let decoder = ViterbiDecoder::new();

        let path = decoder.decode(&model, &words(&["dog", "runs"])).unwrap();
        assert_eq!(path, ["N", "V"]);
    }

    #[test]
    fn test_decode_empty_input() {
        let model = dog_runs_model();
        let decoder = ViterbiDecoder::new();

        let path = decoder.decode(&model, &[]).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_decode_case_folds_input() {
        let model = dog_runs_model();
        let decoder = ViterbiDecoder::new();

        let path = decoder.decode(&model, &words(&["Dog", "RUNS"])).unwrap();
        assert_eq!(path, ["N", "V"]);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let model = dog_runs_model();
        let decoder = ViterbiDecoder::new();
        let input = words(&["dog", "runs"]);

        let first = decoder.decode(&model, &input).unwrap();
        let second = decoder.decode(&model, &input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_round_trip() {
        // Every word is emitted by exactly one tag, so decoding the
        // training sentences must recover the training tags.
        let lines = tag_lines(&[&["D", "N", "V"], &["D", "N"]]);
        let observations = words(&["the", "dog", "runs", "the", "cat"]);
        let model = HmmModel::train(&lines, &observations).unwrap();
        let decoder = ViterbiDecoder::new();

        let path = decoder
            .decode(&model, &words(&["the", "dog", "runs"]))
            .unwrap();
        assert_eq!(path, ["D", "N", "V"]);

        let path = decoder.decode(&model, &words(&["the", "cat"])).unwrap();
        assert_eq!(path, ["D", "N"]);
    }

    #[test]
    fn test_unknown_word_penalized_per_tag() {
        // "N" can be followed by either "ADJ" or "V"; an unknown second
        // word penalizes both candidates equally, and the tie goes to the
        // first tag in iteration order.
        let model = HmmModel::train(
            &tag_lines(&[&["N", "V"], &["N", "ADJ"]]),
            &words(&["dog", "runs", "dog", "quick"]),
        )
        .unwrap();
        let decoder = ViterbiDecoder::new();

        let path = decoder
            .decode(&model, &words(&["dog", "xylophone"]))
            .unwrap();
        assert_eq!(path, ["N", "ADJ"]);
    }

    #[test]
    fn test_tied_sources_keep_first_backpointer() {
        // Both "A" and "B" reach "C" with identical scores when the first
        // word is unknown; the recorded predecessor must be "A", the first
        // source evaluated.
        let model = HmmModel::train(
            &tag_lines(&[&["A", "C"], &["B", "C"]]),
            &words(&["a", "c", "b", "c"]),
        )
        .unwrap();
        let decoder = ViterbiDecoder::new();

        let path = decoder.decode(&model, &words(&["zzz", "c"])).unwrap();
        assert_eq!(path, ["A", "C"]);
    }

    #[test]
    fn test_decode_exhausted_frontier() {
        // "A" never has a successor, so the second observation leaves no
        // reachable tag.
        let model = HmmModel::train(&tag_lines(&[&["A"]]), &words(&["x"])).unwrap();
        let decoder = ViterbiDecoder::new();

        match decoder.decode(&model, &words(&["x", "y"])) {
            Err(HinshiError::FrontierExhausted { index: 1, observation }) => {
                assert_eq!(observation, "y");
            }
            other => panic!("expected frontier exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_penalty() {
        let decoder = ViterbiDecoder::with_penalty(-10.0);
        assert_eq!(decoder.unseen_penalty(), -10.0);

        let model = dog_runs_model();
        let path = decoder
            .decode(&model, &words(&["dog", "xylophone"]))
            .unwrap();
        assert_eq!(path, ["N", "V"]);
    }
}
