//! Corpus loading for parallel tag and sentence files.
//!
//! The external format is one sentence per line: the tag file carries
//! whitespace-delimited tag tokens, the sentence file the matching words.
//! Line `i` of one file corresponds to line `i` of the other.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

/// A labeled training corpus with one tag line per sentence.
#[derive(Debug, Clone, Default)]
pub struct TaggedCorpus {
    /// Tag tokens, one inner vector per sentence.
    pub tag_lines: Vec<Vec<String>>,
    /// Word tokens, case-folded, one inner vector per sentence.
    pub sentences: Vec<Vec<String>>,
}

impl TaggedCorpus {
    /// Load a corpus from a tag file and its parallel sentence file.
    ///
    /// The two files must have the same number of lines; per-token
    /// alignment inside the flattened sequences is checked again by the
    /// core estimator.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(tags_path: P, sentences_path: Q) -> Result<Self> {
        let tag_lines = read_lines(&tags_path, parse_tag_line)
            .with_context(|| format!("failed to read tag file {:?}", tags_path.as_ref()))?;
        let sentences = read_lines(&sentences_path, parse_sentence_line)
            .with_context(|| format!("failed to read sentence file {:?}", sentences_path.as_ref()))?;

        if tag_lines.len() != sentences.len() {
            bail!(
                "tag file has {} lines but sentence file has {}",
                tag_lines.len(),
                sentences.len()
            );
        }
        Ok(Self {
            tag_lines,
            sentences,
        })
    }

    /// All word tokens flattened across sentences, in order.
    pub fn observations(&self) -> Vec<String> {
        self.sentences.iter().flatten().cloned().collect()
    }

    /// All tag tokens flattened across sentences, in order.
    pub fn states(&self) -> Vec<String> {
        self.tag_lines.iter().flatten().cloned().collect()
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the corpus holds no sentences at all.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Split a tag line into whitespace-delimited tag tokens.
pub fn parse_tag_line(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Split a sentence line into whitespace-delimited, case-folded words.
pub fn parse_sentence_line(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_lowercase).collect()
}

fn read_lines<P: AsRef<Path>>(
    path: P,
    parse: fn(&str) -> Vec<String>,
) -> Result<Vec<Vec<String>>> {
    let file = File::open(path)?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(parse(&line?));
    }
    Ok(lines)
}
