//! Title and meta description optimizers.
//!
//! Both fields share one contract: check whether one of the top two
//! keywords is present, flag lengths outside the field's band, and when the
//! keyword is missing propose a minimally edited replacement that carries
//! the primary keyword.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keywords::{KeywordList, contains_any};
use crate::text::char_len;
use crate::word_lists::ACTION_WORDS;

/// Acceptable title length in characters (inclusive).
pub const TITLE_LENGTH: (usize, usize) = (30, 60);

/// Acceptable meta description length in characters (inclusive).
pub const META_LENGTH: (usize, usize) = (120, 160);

/// Characters of the original meta description kept when the keyword
/// prefix pushes it over the limit.
const META_TRUNCATE_AT: usize = 140;

/// Number of leading keywords that count toward field presence.
const PRESENCE_KEYWORDS: usize = 2;

/// Result of optimizing a single text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldOptimization {
    /// The field as supplied.
    pub original: String,
    /// Suggested replacement (equal to `original` when no edit is needed).
    pub optimized: String,
    /// Character length of `optimized`.
    pub length: usize,
    /// Whether one of the top two keywords already appears in `original`.
    pub keyword_present: bool,
    /// Ordered, actionable suggestions.
    pub suggestions: Vec<String>,
}

/// Meta description result: the shared field result plus the action-verb check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MetaDescriptionOptimization {
    /// Shared field result.
    #[serde(flatten)]
    pub field: FieldOptimization,
    /// Whether a call-to-action verb appears in the original.
    pub has_action_words: bool,
}

/// Optimize a post title.
#[tracing::instrument(skip_all, fields(title_len = title.len()))]
pub fn optimize_title(title: &str, keywords: &KeywordList) -> FieldOptimization {
    let primary = keywords.primary();
    let keyword_present = contains_any(title, keywords.top(PRESENCE_KEYWORDS));

    let mut suggestions = Vec::new();
    if let Some(primary) = primary.filter(|_| !keyword_present) {
        suggestions.push(format!("Include primary keyword '{primary}' in title"));
    }

    let len = char_len(title);
    if len > TITLE_LENGTH.1 {
        suggestions.push(format!(
            "Title is {len} characters, consider shortening to under {}",
            TITLE_LENGTH.1
        ));
    } else if len < TITLE_LENGTH.0 {
        suggestions.push(format!(
            "Title is {len} characters, consider making it more descriptive"
        ));
    }

    let optimized = match primary {
        Some(primary) if !keyword_present => insert_title_keyword(title, primary),
        _ => title.to_string(),
    };

    FieldOptimization {
        original: title.to_string(),
        length: char_len(&optimized),
        optimized,
        keyword_present,
        suggestions,
    }
}

/// Put the primary keyword right after the first colon, or in front of
/// the whole title when there is no colon.
fn insert_title_keyword(title: &str, primary: &str) -> String {
    match title.split_once(':') {
        Some((head, tail)) => format!("{head}: {primary} {tail}").trim().to_string(),
        None => format!("{primary}: {title}"),
    }
}

/// Optimize a meta description.
#[tracing::instrument(skip_all, fields(meta_len = meta.len()))]
pub fn optimize_meta_description(meta: &str, keywords: &KeywordList) -> MetaDescriptionOptimization {
    let primary = keywords.primary();
    let keyword_present = contains_any(meta, keywords.top(PRESENCE_KEYWORDS));

    let mut suggestions = Vec::new();
    if let Some(primary) = primary.filter(|_| !keyword_present) {
        suggestions.push(format!(
            "Include primary keyword '{primary}' in meta description"
        ));
    }

    let len = char_len(meta);
    if len > META_LENGTH.1 {
        suggestions.push(format!(
            "Meta description is {len} characters, trim to under {}",
            META_LENGTH.1
        ));
    } else if len < META_LENGTH.0 {
        suggestions.push(format!(
            "Consider making meta description more descriptive ({}-{} chars)",
            META_LENGTH.0, META_LENGTH.1
        ));
    }

    let lowered = meta.to_lowercase();
    let has_action_words = ACTION_WORDS.iter().any(|w| lowered.contains(w));
    if !has_action_words {
        suggestions.push("Add action words to encourage clicks".to_string());
    }

    let optimized = match primary {
        Some(primary) if !keyword_present => prefix_meta_keyword(meta, primary),
        _ => meta.to_string(),
    };

    MetaDescriptionOptimization {
        field: FieldOptimization {
            original: meta.to_string(),
            length: char_len(&optimized),
            optimized,
            keyword_present,
            suggestions,
        },
        has_action_words,
    }
}

fn prefix_meta_keyword(meta: &str, primary: &str) -> String {
    let prefixed = format!("{primary}: {meta}");
    if char_len(&prefixed) <= META_LENGTH.1 {
        return prefixed;
    }
    let kept: String = meta.chars().take(META_TRUNCATE_AT).collect();
    format!("{kept}... Learn more about {primary}!")
}
