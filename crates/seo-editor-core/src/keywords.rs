//! Target keywords and keyword density analysis.
//!
//! A [`KeywordList`] is ordered: the first entry is the primary keyword and
//! gets a stricter density target than the secondary keywords that follow.
//! Density counts whole-word matches only, so "cat" never matches inside
//! "category".

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::{TextStats, round2};

/// How many keywords the density analyzer looks at.
pub const MAX_ANALYZED_KEYWORDS: usize = 5;

/// Density target for the primary keyword, in percent.
pub const PRIMARY_RANGE: OptimalRange = OptimalRange {
    low: 1.0,
    high: 3.0,
};

/// Density target for every secondary keyword, in percent.
pub const SECONDARY_RANGE: OptimalRange = OptimalRange {
    low: 0.5,
    high: 1.0,
};

/// Ordered list of target keywords.
///
/// Entries are trimmed and blank entries dropped on construction, so every
/// stored keyword is non-empty with no surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct KeywordList(Vec<String>);

impl KeywordList {
    /// Build a list from any sequence of strings.
    ///
    /// Entries are trimmed and blank entries are skipped.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            keywords
                .into_iter()
                .map(|k| {
                    let k: String = k.into();
                    k.trim().to_string()
                })
                .filter(|k| !k.is_empty())
                .collect(),
        )
    }

    /// The primary keyword, if any.
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// The first `n` keywords (fewer if the list is shorter).
    pub fn top(&self, n: usize) -> &[String] {
        &self.0[..n.min(self.0.len())]
    }

    /// All keywords in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no keywords.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Inclusive density band, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OptimalRange {
    /// Lower bound.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
}

impl OptimalRange {
    /// Classify a density against this band.
    pub fn classify(&self, density: f64) -> DensityStatus {
        if density < self.low {
            DensityStatus::UnderOptimized
        } else if density > self.high {
            DensityStatus::OverOptimized
        } else {
            DensityStatus::Optimal
        }
    }
}

/// Where a keyword's density falls relative to its target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DensityStatus {
    /// Below the band.
    UnderOptimized,
    /// Inside the band.
    Optimal,
    /// Above the band.
    OverOptimized,
}

impl DensityStatus {
    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnderOptimized => "under-optimized",
            Self::Optimal => "optimal",
            Self::OverOptimized => "over-optimized",
        }
    }
}

impl std::fmt::Display for DensityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Density measurement for one keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordDensity {
    /// The keyword as supplied.
    pub keyword: String,
    /// Whole-word, case-insensitive occurrences in the body.
    pub count: usize,
    /// Occurrences per hundred words, rounded to two decimals.
    pub density: f64,
    /// Classification against `optimal_range`.
    pub status: DensityStatus,
    /// Target band for this keyword.
    pub optimal_range: OptimalRange,
}

/// Density analysis across the analyzed keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordAnalysis {
    /// Word count the densities were computed against.
    pub total_words: usize,
    /// One entry per analyzed keyword, in keyword order.
    pub keywords: Vec<KeywordDensity>,
    /// One suggestion per keyword outside its band.
    pub suggestions: Vec<String>,
}

/// Measure density for the first [`MAX_ANALYZED_KEYWORDS`] keywords.
#[tracing::instrument(skip_all, fields(keywords = keywords.len()))]
pub fn analyze_keyword_density(
    body: &str,
    stats: &TextStats,
    keywords: &KeywordList,
) -> KeywordAnalysis {
    let lowered = body.to_lowercase();
    let total_words = stats.word_count;

    let entries: Vec<KeywordDensity> = keywords
        .top(MAX_ANALYZED_KEYWORDS)
        .iter()
        .enumerate()
        .map(|(idx, keyword)| {
            let count = count_occurrences(&lowered, keyword);
            let density = density_percent(count, total_words);
            let optimal_range = if idx == 0 {
                PRIMARY_RANGE
            } else {
                SECONDARY_RANGE
            };
            KeywordDensity {
                keyword: keyword.clone(),
                count,
                density: round2(density),
                status: optimal_range.classify(density),
                optimal_range,
            }
        })
        .collect();

    let suggestions = entries.iter().filter_map(density_suggestion).collect();

    KeywordAnalysis {
        total_words,
        keywords: entries,
        suggestions,
    }
}

fn density_suggestion(entry: &KeywordDensity) -> Option<String> {
    let verb = match entry.status {
        DensityStatus::Optimal => return None,
        DensityStatus::UnderOptimized => "Increase",
        DensityStatus::OverOptimized => "Reduce",
    };
    Some(format!(
        "{verb} '{}' usage - currently {}%, target {}-{}%",
        entry.keyword, entry.density, entry.optimal_range.low, entry.optimal_range.high,
    ))
}

/// Occurrences per hundred words; zero when there are no words.
pub fn density_percent(count: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        0.0
    } else {
        count as f64 / word_count as f64 * 100.0
    }
}

/// Count whole-word occurrences of `keyword` in already-lowercased text.
pub fn count_occurrences(lowered_text: &str, keyword: &str) -> usize {
    let pattern = format!(r"\b{}\b", regex::escape(&keyword.to_lowercase()));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(lowered_text).count(),
        Err(err) => {
            tracing::warn!(keyword, error = %err, "keyword pattern rejected");
            0
        }
    }
}

/// Returns `true` if any of `keywords` appears in `text` as a
/// case-insensitive substring.
pub fn contains_any(text: &str, keywords: &[String]) -> bool {
    let lowered = text.to_lowercase();
    keywords
        .iter()
        .any(|k| lowered.contains(&k.to_lowercase()))
}
