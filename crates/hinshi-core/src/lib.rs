//! # Hinshi Core
//!
//! The heart of the Hinshi part-of-speech tagger. Trains a hidden Markov
//! model from a labeled corpus and decodes new sentences into their most
//! likely tag sequence with the Viterbi algorithm.
//!
//! ## Quick Start
//!
//! ```rust
//! use hinshi_core::{HmmModel, ViterbiDecoder};
//!
//! let tag_lines = vec![vec!["N".to_string(), "V".to_string()]];
//! let observations = vec!["dog".to_string(), "runs".to_string()];
//! let model = HmmModel::train(&tag_lines, &observations).unwrap();
//!
//! let decoder = ViterbiDecoder::new();
//! let tags = decoder.decode(&model, &observations).unwrap();
//! assert_eq!(tags, ["N", "V"]);
//! ```
pub mod decoder;
pub mod error;
pub mod model;

// Re-export primary API
pub use decoder::{DEFAULT_UNSEEN_PENALTY, ViterbiDecoder};
pub use error::{HinshiError, Result};
pub use model::{EmissionModel, HmmModel, LogProbTable, START_STATE, TransitionModel};
