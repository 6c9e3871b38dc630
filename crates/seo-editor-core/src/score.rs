//! Aggregate SEO score.
//!
//! Five point buckets summed to a 0–100 total:
//!
//! | Component | Max | Rule |
//! |-----------|-----|------|
//! | title_optimization | 25 | top-2 keyword in title (25), any keyword (15) |
//! | meta_description | 20 | 120–160 chars with a keyword (20), keyword only (10) |
//! | keyword_usage | 25 | primary density 1–3% (25), 0.5–1% or 3–4% (15) |
//! | content_length | 20 | 1500–3000 words (20), 1000–1499 (15), over 3000 (10) |
//! | headings_structure | 10 | 3+ heading markers (10), 1+ (5) |
//!
//! The keyword-usage bucket measures primary density on its own, against
//! the record's reported word count, rather than reusing the density
//! analyzer's output. Changing one must not silently move the other.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content::ContentRecord;
use crate::fields::META_LENGTH;
use crate::keywords::{KeywordList, contains_any, count_occurrences, density_percent};
use crate::text::{char_len, count_heading_markers, round1};

/// Highest achievable total.
pub const MAX_SCORE: u32 = 100;

/// Letter grade for a total score.
///
/// Ordered best first, so `Grade::A < Grade::F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Grade {
    /// 90 and above.
    A,
    /// 80–89.
    B,
    /// 70–79.
    C,
    /// 60–69.
    D,
    /// Below 60.
    F,
}

impl Grade {
    /// Grade a total score.
    pub const fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }

    /// Returns `true` if this grade is `min` or better.
    pub fn meets(self, min: Self) -> bool {
        self <= min
    }

    /// The grade letter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points awarded per component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreComponents {
    /// Keyword presence in the title (0, 15, or 25).
    pub title_optimization: u32,
    /// Meta description length and keyword presence (0, 10, or 20).
    pub meta_description: u32,
    /// Primary keyword density (0, 15, or 25).
    pub keyword_usage: u32,
    /// Word count band (0, 10, 15, or 20).
    pub content_length: u32,
    /// Heading marker count (0, 5, or 10).
    pub headings_structure: u32,
}

impl ScoreComponents {
    /// Sum of all components.
    pub const fn total(&self) -> u32 {
        self.title_optimization
            + self.meta_description
            + self.keyword_usage
            + self.content_length
            + self.headings_structure
    }
}

/// Aggregate score and grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeoScore {
    /// Points out of [`MAX_SCORE`].
    pub total_score: u32,
    /// Always [`MAX_SCORE`].
    pub max_score: u32,
    /// `total_score` as a percentage of `max_score`, one decimal.
    pub percentage: f64,
    /// Per-component breakdown.
    pub components: ScoreComponents,
    /// Letter grade.
    pub grade: Grade,
}

/// Compute the aggregate score for a content record.
#[tracing::instrument(skip_all, fields(keywords = keywords.len(), words = content.word_count))]
pub fn calculate_seo_score(content: &ContentRecord, keywords: &KeywordList) -> SeoScore {
    let components = ScoreComponents {
        title_optimization: title_points(&content.title, keywords),
        meta_description: meta_points(&content.meta_description, keywords),
        keyword_usage: keyword_usage_points(content, keywords),
        content_length: content_length_points(content.word_count),
        headings_structure: heading_points(count_heading_markers(&content.full_text)),
    };

    let total_score = components.total().min(MAX_SCORE);
    let grade = Grade::from_score(total_score);
    tracing::debug!(total_score, grade = grade.as_str(), "seo score computed");

    SeoScore {
        total_score,
        max_score: MAX_SCORE,
        percentage: round1(f64::from(total_score) / f64::from(MAX_SCORE) * 100.0),
        components,
        grade,
    }
}

fn title_points(title: &str, keywords: &KeywordList) -> u32 {
    if contains_any(title, keywords.top(2)) {
        25
    } else if contains_any(title, keywords.as_slice()) {
        15
    } else {
        0
    }
}

fn meta_points(meta: &str, keywords: &KeywordList) -> u32 {
    let has_keyword = contains_any(meta, keywords.as_slice());
    let len = char_len(meta);
    if has_keyword && (META_LENGTH.0..=META_LENGTH.1).contains(&len) {
        20
    } else if has_keyword {
        10
    } else {
        0
    }
}

fn keyword_usage_points(content: &ContentRecord, keywords: &KeywordList) -> u32 {
    let Some(primary) = keywords.primary() else {
        return 0;
    };
    let count = count_occurrences(&content.full_text.to_lowercase(), primary);
    let density = density_percent(count, content.word_count);
    if (1.0..=3.0).contains(&density) {
        25
    } else if (0.5..1.0).contains(&density) || (density > 3.0 && density <= 4.0) {
        15
    } else {
        0
    }
}

const fn content_length_points(word_count: usize) -> u32 {
    match word_count {
        1500..=3000 => 20,
        1000..=1499 => 15,
        3001.. => 10,
        _ => 0,
    }
}

const fn heading_points(markers: usize) -> u32 {
    match markers {
        3.. => 10,
        1..=2 => 5,
        _ => 0,
    }
}
