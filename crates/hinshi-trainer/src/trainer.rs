//! Training driver: labeled corpus in, serialized model out.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use hinshi_core::{HmmModel, ViterbiDecoder};

use crate::data::TaggedCorpus;
use crate::evaluation::Evaluation;

/// Train a model from a loaded corpus.
pub fn train(corpus: &TaggedCorpus) -> Result<HmmModel> {
    let model = HmmModel::train(&corpus.tag_lines, &corpus.observations())?;
    Ok(model)
}

/// Save a trained model as pretty-printed JSON.
pub fn save_model<P: AsRef<Path>>(path: P, model: &HmmModel) -> Result<()> {
    let json = serde_json::to_string_pretty(model)?;
    fs::write(&path, json)
        .with_context(|| format!("failed to write model to {:?}", path.as_ref()))?;
    Ok(())
}

/// Load a model saved by [`save_model`].
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<HmmModel> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read model from {:?}", path.as_ref()))?;
    let model = serde_json::from_str(&content)?;
    Ok(model)
}

/// Re-tag the training sentences and score them against the reference tags.
pub fn self_evaluate(model: &HmmModel, corpus: &TaggedCorpus) -> Result<Evaluation> {
    let decoder = ViterbiDecoder::new();
    let mut evaluation = Evaluation::new();
    for (tags, sentence) in corpus.tag_lines.iter().zip(&corpus.sentences) {
        let predicted = decoder.decode(model, sentence)?;
        evaluation.accumulate(tags, &predicted);
    }
    Ok(evaluation)
}

/// Full training run: load the corpus, train, self-evaluate, save.
pub fn run_training<P, Q, R>(tags_path: P, sentences_path: Q, model_path: R) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let corpus = TaggedCorpus::load(&tags_path, &sentences_path)?;
    info!(sentences = corpus.len(), "corpus loaded");

    let model = train(&corpus)?;
    info!(
        transition_rows = model.transitions.table().len(),
        emission_rows = model.emissions.table().len(),
        "model trained"
    );

    let evaluation = self_evaluate(&model, &corpus)?;
    println!("Training complete!\n");
    println!("{evaluation}");

    save_model(&model_path, &model)?;
    info!(path = ?model_path.as_ref(), "model saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{parse_sentence_line, parse_tag_line};

    fn corpus() -> TaggedCorpus {
        TaggedCorpus {
            tag_lines: vec![parse_tag_line("D N V"), parse_tag_line("D N")],
            sentences: vec![
                parse_sentence_line("the dog runs"),
                parse_sentence_line("the cat"),
            ],
        }
    }

    #[test]
    fn test_train_from_corpus() {
        let model = train(&corpus()).unwrap();
        assert!(model.transitions.successors("#").is_some());
        assert!(model.emissions.score("N", "dog").is_some());
    }

    #[test]
    fn test_self_evaluation_is_perfect_on_unambiguous_corpus() {
        let corpus = corpus();
        let model = train(&corpus).unwrap();
        let evaluation = self_evaluate(&model, &corpus).unwrap();

        assert_eq!(evaluation.incorrect(), 0);
        assert_eq!(evaluation.total(), 5);
        assert_eq!(evaluation.accuracy(), 1.0);
    }

    #[test]
    fn test_model_serialization_round_trip() {
        let model = train(&corpus()).unwrap();
        let json = serde_json::to_string_pretty(&model).unwrap();
        let back: HmmModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, back);
    }
}
