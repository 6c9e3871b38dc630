//! Text statistics.
//!
//! Provides sentence splitting, word extraction, paragraph splitting, and
//! the aggregate [`TextStats`] consumed by the analyzers. Splitting is
//! deliberately simple punctuation/whitespace splitting so scores are
//! reproducible across runs.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A run of sentence terminators ends a sentence.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Two-character prefix marking a subsection title in body text.
pub const HEADING_MARKER: &str = "##";

/// Counts and averages over a body of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Number of non-empty sentences.
    pub sentence_count: usize,
    /// Number of non-empty paragraphs.
    pub paragraph_count: usize,
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Mean words per sentence (0 if there are no sentences).
    pub avg_sentence_length: f64,
    /// Mean words per paragraph (0 if there are no paragraphs).
    pub avg_paragraph_length: f64,
}

impl TextStats {
    /// Compute statistics for `text`. Empty text yields all zeros.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn from_text(text: &str) -> Self {
        let sentences = split_sentences(text);
        let paragraphs = split_paragraphs(text);

        Self {
            sentence_count: sentences.len(),
            paragraph_count: paragraphs.len(),
            word_count: count_words(text),
            avg_sentence_length: mean_words(&sentences),
            avg_paragraph_length: mean_words(&paragraphs),
        }
    }
}

/// Split text into sentences on runs of `.`, `!`, and `?`.
///
/// Fragments are trimmed and empty fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Count words by whitespace splitting.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count non-overlapping heading markers anywhere in `text`.
pub fn count_heading_markers(text: &str) -> usize {
    text.matches(HEADING_MARKER).count()
}

/// Length of `text` in characters (not bytes).
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn mean_words(chunks: &[&str]) -> f64 {
    if chunks.is_empty() {
        return 0.0;
    }
    let total: usize = chunks.iter().map(|c| count_words(c)).sum();
    total as f64 / chunks.len() as f64
}

/// Round to one decimal place.
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
