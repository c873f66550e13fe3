use thiserror::Error;

/// Errors that can occur during Hinshi core operations.
#[derive(Debug, Error)]
pub enum HinshiError {
    /// The aligned training sequences have different lengths.
    #[error("aligned training sequences differ in length: {states} states vs {observations} observations")]
    AlignmentMismatch {
        /// Number of state tokens supplied.
        states: usize,
        /// Number of observation tokens supplied.
        observations: usize,
    },

    /// No state reachable from the frontier could consume an observation.
    #[error("no reachable state for observation {index} ({observation:?})")]
    FrontierExhausted {
        /// Index of the observation that emptied the frontier.
        index: usize,
        /// The observation token, after case folding.
        observation: String,
    },
}

/// Result type alias for Hinshi operations.
pub type Result<T> = std::result::Result<T, HinshiError>;
