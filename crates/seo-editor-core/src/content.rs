//! Content records supplied by the writing layer.
//!
//! The engine only reads these. Missing fields decode as empty strings or
//! zero so a partial record still scores.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{InputError, InputResult};
use crate::markdown;
use crate::text::count_words;

/// A piece of generated content to be scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ContentRecord {
    /// Post title.
    pub title: String,
    /// Meta description shown in search results.
    pub meta_description: String,
    /// Full body text, markdown headings included.
    #[serde(alias = "body_text")]
    pub full_text: String,
    /// Word count reported by the writer.
    pub word_count: usize,
}

impl ContentRecord {
    /// Build a record from parts, deriving the word count from the body.
    pub fn new(
        title: impl Into<String>,
        meta_description: impl Into<String>,
        full_text: impl Into<String>,
    ) -> Self {
        let full_text = full_text.into();
        Self {
            title: title.into(),
            meta_description: meta_description.into(),
            word_count: count_words(&full_text),
            full_text,
        }
    }

    /// Decode a record from JSON.
    pub fn from_json(json: &str) -> InputResult<Self> {
        serde_json::from_str(json).map_err(|source| InputError::Json {
            kind: "content",
            source,
        })
    }

    /// Build a record from a markdown post.
    ///
    /// The title is the first level-1 heading (empty if there is none), the
    /// body is the document without frontmatter, and the word count is the
    /// body's whitespace word count. Markdown has no slot for a meta
    /// description, so it is supplied separately.
    pub fn from_markdown(text: &str, meta_description: impl Into<String>) -> Self {
        let title = markdown::extract_title(text).unwrap_or_default();
        let body = markdown::strip_frontmatter(text);
        Self::new(title, meta_description, body)
    }
}
