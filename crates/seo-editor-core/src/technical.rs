//! Technical checklist: fixed pass/fail rules over structural properties.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content::ContentRecord;
use crate::fields::{META_LENGTH, TITLE_LENGTH};
use crate::text::{char_len, count_heading_markers};

/// Minimum body word count for the content-length check.
pub const MIN_WORD_COUNT: usize = 1000;

/// Minimum heading markers for the heading-structure check.
pub const MIN_HEADINGS: usize = 2;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The rule holds.
    Pass,
    /// The rule does not hold.
    Fail,
}

impl CheckStatus {
    const fn from_bool(pass: bool) -> Self {
        if pass { Self::Pass } else { Self::Fail }
    }
}

/// One structural rule and the value it was evaluated on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TechnicalCheck {
    /// Stable check name.
    pub name: String,
    /// Pass or fail.
    pub status: CheckStatus,
    /// The measured value.
    pub value: usize,
}

/// All technical checks plus the pass tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TechnicalReport {
    /// Checks in fixed order.
    pub checks: Vec<TechnicalCheck>,
    /// Number of passing checks.
    pub passed: usize,
    /// Number of checks.
    pub total: usize,
    /// `"passed/total"`.
    pub score: String,
}

/// Run the four technical checks.
#[tracing::instrument(skip_all)]
pub fn check_technical(content: &ContentRecord) -> TechnicalReport {
    let title_len = char_len(&content.title);
    let meta_len = char_len(&content.meta_description);
    let headings = count_heading_markers(&content.full_text);

    let checks = vec![
        check(
            "title_length",
            (TITLE_LENGTH.0..=TITLE_LENGTH.1).contains(&title_len),
            title_len,
        ),
        check(
            "meta_description_length",
            (META_LENGTH.0..=META_LENGTH.1).contains(&meta_len),
            meta_len,
        ),
        check(
            "content_length",
            content.word_count >= MIN_WORD_COUNT,
            content.word_count,
        ),
        check("heading_structure", headings >= MIN_HEADINGS, headings),
    ];

    let passed = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Pass)
        .count();
    let total = checks.len();

    TechnicalReport {
        checks,
        passed,
        total,
        score: format!("{passed}/{total}"),
    }
}

fn check(name: &str, pass: bool, value: usize) -> TechnicalCheck {
    TechnicalCheck {
        name: name.to_string(),
        status: CheckStatus::from_bool(pass),
        value,
    }
}
