//! Markdown helpers for reading posts written as markdown.
//!
//! Uses pulldown-cmark for heading detection so `#` characters inside code
//! blocks or inline code are not mistaken for a title.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Extract headings from markdown text.
///
/// Returns a list of `(level, text)` pairs where level is 1-6.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn extract_headings(text: &str) -> Vec<(u8, String)> {
    let text = strip_frontmatter(text);
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(&text, options);

    let mut headings = Vec::new();
    let mut in_heading: Option<u8> = None;
    let mut heading_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = Some(level as u8);
                heading_text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_heading.is_some() => {
                heading_text.push_str(&t);
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(level) = in_heading.take() {
                    headings.push((level, heading_text.trim().to_string()));
                }
            }
            _ => {}
        }
    }

    headings
}

/// The text of the first level-1 heading, if any.
pub fn extract_title(text: &str) -> Option<String> {
    extract_headings(text)
        .into_iter()
        .find(|(level, _)| *level == 1)
        .map(|(_, title)| title)
}

/// Strip YAML frontmatter delimited by `---` lines.
pub fn strip_frontmatter(text: &str) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text.to_string();
    }

    // Find the closing `---`
    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text.to_string();
    };

    // Skip past the closing `---` and its newline
    let remainder = &after_opening[close_pos + 4..];
    remainder
        .strip_prefix('\n')
        .unwrap_or(remainder)
        .to_string()
}
