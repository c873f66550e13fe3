//! Training binary: builds a tagger model from a labeled corpus.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use hinshi_trainer::run_training;

/// CLI arguments
#[derive(Parser)]
#[command(name = "train")]
#[command(about = "Train an HMM part-of-speech tagging model")]
#[command(version)]
struct Cli {
    /// File with one line of tags per sentence
    #[arg(short, long)]
    tags: PathBuf,

    /// File with the corresponding sentences, one per line
    #[arg(short, long)]
    sentences: PathBuf,

    /// Where to write the trained model (JSON)
    #[arg(short, long, default_value = "model.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    run_training(&cli.tags, &cli.sentences, &cli.output)
}
