//! Readability classification.
//!
//! A points heuristic, not a real readability formula: start at 100,
//! deduct for long sentences and long paragraphs, reward transition words,
//! then bucket the result.
//!
//! | Points | Level |
//! |--------|-------|
//! | ≥ 80   | excellent |
//! | ≥ 60   | good |
//! | ≥ 40   | fair |
//! | < 40   | needs improvement |

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::{TextStats, round1, round2};
use crate::word_lists::is_transition_word;

/// Average sentence length (words) above which points are deducted.
pub const MAX_SENTENCE_LENGTH: f64 = 20.0;

/// Average paragraph length (words) above which points are deducted.
pub const MAX_PARAGRAPH_LENGTH: f64 = 150.0;

/// Transition ratio (percent) below which more transitions are suggested.
pub const MIN_TRANSITION_RATIO: f64 = 1.0;

/// Qualitative readability bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ReadabilityLevel {
    /// 80 points or more.
    #[serde(rename = "excellent")]
    Excellent,
    /// 60 to 79 points.
    #[serde(rename = "good")]
    Good,
    /// 40 to 59 points.
    #[serde(rename = "fair")]
    Fair,
    /// Below 40 points.
    #[serde(rename = "needs improvement")]
    NeedsImprovement,
}

impl ReadabilityLevel {
    /// Bucket a points value.
    pub fn from_points(points: f64) -> Self {
        if points >= 80.0 {
            Self::Excellent
        } else if points >= 60.0 {
            Self::Good
        } else if points >= 40.0 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NeedsImprovement => "needs improvement",
        }
    }
}

impl std::fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of readability classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Qualitative bucket.
    pub score: ReadabilityLevel,
    /// Mean words per sentence, rounded to one decimal.
    pub avg_sentence_length: f64,
    /// Mean words per paragraph, rounded to one decimal.
    pub avg_paragraph_length: f64,
    /// Transition words per hundred words, rounded to two decimals.
    pub transition_word_ratio: f64,
    /// One fixed suggestion per tripped threshold.
    pub suggestions: Vec<String>,
}

/// Classify the readability of `text`.
#[tracing::instrument(skip_all, fields(words = stats.word_count))]
pub fn check_readability(text: &str, stats: &TextStats) -> ReadabilityReport {
    let ratio = transition_ratio(text, stats.word_count);
    let points = readability_points(stats.avg_sentence_length, stats.avg_paragraph_length, ratio);
    let score = ReadabilityLevel::from_points(points);
    tracing::debug!(points, level = score.as_str(), "readability classified");

    let mut suggestions = Vec::new();
    if stats.avg_sentence_length > MAX_SENTENCE_LENGTH {
        suggestions.push("Break down long sentences for better readability".to_string());
    }
    if stats.avg_paragraph_length > MAX_PARAGRAPH_LENGTH {
        suggestions.push("Shorten paragraphs - aim for 100-150 words per paragraph".to_string());
    }
    if ratio < MIN_TRANSITION_RATIO {
        suggestions.push("Add more transition words to improve flow".to_string());
    }

    ReadabilityReport {
        score,
        avg_sentence_length: round1(stats.avg_sentence_length),
        avg_paragraph_length: round1(stats.avg_paragraph_length),
        transition_word_ratio: round2(ratio),
        suggestions,
    }
}

/// Points on the 100-based readability scale.
///
/// - −2 per word of average sentence length beyond 20
/// - −0.5 per word of average paragraph length beyond 150
/// - +min(5 × ratio, 20) when the transition ratio exceeds 1
pub fn readability_points(avg_sentence: f64, avg_paragraph: f64, transition_ratio: f64) -> f64 {
    let mut points = 100.0;

    if avg_sentence > MAX_SENTENCE_LENGTH {
        points -= (avg_sentence - MAX_SENTENCE_LENGTH) * 2.0;
    }

    if avg_paragraph > MAX_PARAGRAPH_LENGTH {
        points -= (avg_paragraph - MAX_PARAGRAPH_LENGTH) * 0.5;
    }

    if transition_ratio > MIN_TRANSITION_RATIO {
        points += (transition_ratio * 5.0).min(20.0);
    }

    points
}

/// Percentage of whitespace tokens that are transition words.
///
/// Tokens are lowercased and stripped of trailing `.,!?` before lookup.
pub fn transition_ratio(text: &str, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let hits = text
        .split_whitespace()
        .filter(|token| {
            let lowered = token.to_lowercase();
            is_transition_word(lowered.trim_end_matches(['.', ',', '!', '?']))
        })
        .count();
    hits as f64 / word_count as f64 * 100.0
}
