//! Tagging accuracy accounting.

use std::collections::BTreeMap;
use std::fmt;

/// Per-tag match counts against the gold-standard data.
#[derive(Debug, Default, Clone, Copy)]
struct TagCount {
    correct: usize,
    total: usize,
}

/// Accumulated comparison of predicted tags against reference tags.
#[derive(Debug, Default)]
pub struct Evaluation {
    correct: usize,
    total: usize,
    per_tag: BTreeMap<String, TagCount>,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sentence worth of (reference, prediction) pairs.
    pub fn accumulate(&mut self, reference: &[String], prediction: &[String]) {
        for (r, p) in reference.iter().zip(prediction) {
            let entry = self.per_tag.entry(r.clone()).or_default();
            entry.total += 1;
            if r == p {
                entry.correct += 1;
                self.correct += 1;
            }
            self.total += 1;
        }
    }

    /// Number of correctly predicted tags.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Number of wrongly predicted tags.
    pub fn incorrect(&self) -> usize {
        self.total - self.correct
    }

    /// Total number of scored tags.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of tags predicted correctly; zero when nothing was scored.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy by tag (#correct/#reference):")?;
        for (tag, count) in &self.per_tag {
            writeln!(f, "\t{}: {}/{}", tag, count.correct, count.total)?;
        }
        writeln!(f, "Correct tags: {}", self.correct)?;
        writeln!(f, "Incorrect tags: {}", self.incorrect())?;
        writeln!(f, "Total tags: {}", self.total)?;
        write!(f, "Correctness percentage: {:.2}", 100.0 * self.accuracy())
    }
}
