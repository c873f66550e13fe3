//! # Hinshi Trainer
//!
//! Corpus loading, model training, persistence, and accuracy evaluation
//! for the Hinshi part-of-speech tagger.

pub mod data;
pub mod evaluation;
pub mod trainer;

pub use data::TaggedCorpus;
pub use evaluation::Evaluation;
pub use trainer::{load_model, run_training, save_model, train};
