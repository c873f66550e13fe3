//! Hinshi Tagging Tool
//!
//! Tags sentences with a trained HMM model. Provides an interactive
//! console mode and a batch file mode with an optional accuracy report
//! against a reference tag file.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use hinshi_core::{DEFAULT_UNSEEN_PENALTY, HmmModel, ViterbiDecoder};
use hinshi_trainer::data::{parse_sentence_line, parse_tag_line};
use hinshi_trainer::{Evaluation, load_model};

/// CLI arguments
#[derive(Parser)]
#[command(name = "hinshi-tag")]
#[command(about = "Tag sentences with a trained HMM part-of-speech model")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Trained model file (JSON)
    #[arg(short, long, default_value = "model.json")]
    model: PathBuf,

    /// Log-score fallback for words a tag was never seen emitting
    #[arg(long, default_value_t = DEFAULT_UNSEEN_PENALTY)]
    unseen_penalty: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Tag sentences typed on standard input, one per line
    Console,
    /// Tag every line of a sentence file and write the tags to a file
    Batch {
        /// Sentence file, one sentence per line
        #[arg(short, long)]
        sentences: PathBuf,

        /// Where to write the tagged output
        #[arg(short, long)]
        output: PathBuf,

        /// Reference tag file to score the output against
        #[arg(short, long)]
        reference: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let model = load_model(&cli.model)?;
    let decoder = ViterbiDecoder::with_penalty(cli.unseen_penalty);
    info!(model = ?cli.model, "model loaded");

    match cli.command {
        Commands::Console => run_console(&model, &decoder),
        Commands::Batch {
            sentences,
            output,
            reference,
        } => run_batch(&model, &decoder, &sentences, &output, reference.as_deref()),
    }
}

/// Interactive loop: read a sentence, print each word with its tag.
///
/// A sentence that cannot be tagged is reported and the loop continues;
/// the model is unaffected.
fn run_console(model: &HmmModel, decoder: &ViterbiDecoder) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("Type a sentence to tag (ctrl-d to quit):");
        let Some(line) = lines.next() else {
            break;
        };
        let words = parse_sentence_line(&line?);
        if words.is_empty() {
            continue;
        }
        match decoder.decode(model, &words) {
            Ok(tags) => println!("{}", render_tagged(&words, &tags)),
            Err(e) => warn!("could not tag sentence: {e}"),
        }
    }
    Ok(())
}

/// Tag every line of `sentences_path`, writing one line of tags per input
/// line, and score the result if a reference tag file was given.
fn run_batch(
    model: &HmmModel,
    decoder: &ViterbiDecoder,
    sentences_path: &Path,
    output_path: &Path,
    reference: Option<&Path>,
) -> Result<()> {
    let input = File::open(sentences_path)
        .with_context(|| format!("failed to open sentence file {sentences_path:?}"))?;
    let mut output = BufWriter::new(
        File::create(output_path)
            .with_context(|| format!("failed to create output file {output_path:?}"))?,
    );

    let mut predictions: Vec<Vec<String>> = Vec::new();
    for (number, line) in BufReader::new(input).lines().enumerate() {
        let words = parse_sentence_line(&line?);
        let tags = decoder
            .decode(model, &words)
            .with_context(|| format!("failed to tag line {}", number + 1))?;
        writeln!(output, "{}", tags.join(" "))?;
        predictions.push(tags);
    }
    output.flush()?;
    info!(sentences = predictions.len(), output = ?output_path, "tagged output written");

    if let Some(reference_path) = reference {
        let reference_file = File::open(reference_path)
            .with_context(|| format!("failed to open reference tag file {reference_path:?}"))?;
        let mut evaluation = Evaluation::new();
        for (line, predicted) in BufReader::new(reference_file).lines().zip(&predictions) {
            evaluation.accumulate(&parse_tag_line(&line?), predicted);
        }
        println!("{evaluation}");
    }
    Ok(())
}

/// Render each word with its predicted tag as `word/TAG` pairs.
fn render_tagged(words: &[String], tags: &[String]) -> String {
    words
        .iter()
        .zip(tags)
        .map(|(word, tag)| format!("{word}/{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tagged() {
        let words = vec!["the".to_string(), "dog".to_string()];
        let tags = vec!["D".to_string(), "N".to_string()];
        assert_eq!(render_tagged(&words, &tags), "the/D dog/N");
    }
}
