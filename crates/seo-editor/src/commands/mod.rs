//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

use seo_editor_core::{ContentRecord, KeywordList, ResearchContext, resolve_keywords};

pub mod info;
pub mod keywords;
pub mod optimize;
pub mod readability;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Load a content record from a JSON or markdown file.
///
/// `.json` files decode as a content record; anything else is treated as a
/// markdown post. `title` and `meta` override whatever the file provides.
pub fn load_content(
    path: &Utf8Path,
    title: Option<&str>,
    meta: Option<&str>,
    max_bytes: Option<usize>,
) -> anyhow::Result<ContentRecord> {
    let text = read_input_file(path, max_bytes)?;
    let mut record = if path.extension() == Some("json") {
        ContentRecord::from_json(&text).with_context(|| format!("failed to parse {path}"))?
    } else {
        ContentRecord::from_markdown(&text, meta.unwrap_or_default())
    };
    if let Some(title) = title {
        record.title = title.to_string();
    }
    if let Some(meta) = meta {
        record.meta_description = meta.to_string();
    }
    Ok(record)
}

/// Arguments shared by commands that score content against keywords.
#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Content file (`.json` content record or markdown post).
    pub file: Utf8PathBuf,

    /// Target keywords, primary first (comma-separated).
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Option<Vec<String>>,

    /// Research output (JSON) supplying fallback keywords and citations.
    #[arg(short, long, value_name = "FILE")]
    pub research: Option<Utf8PathBuf>,

    /// Override the content title.
    #[arg(long)]
    pub title: Option<String>,

    /// Meta description (markdown posts have none of their own).
    #[arg(long)]
    pub meta: Option<String>,
}

/// Everything a scoring command needs, read from disk.
#[derive(Debug)]
pub struct LoadedInput {
    /// The content record.
    pub content: ContentRecord,
    /// Research context (empty when no research file was given).
    pub research: ResearchContext,
    /// Keywords requested explicitly or by config; empty means "use research".
    pub requested: KeywordList,
}

impl LoadedInput {
    /// Keywords the content is scored against.
    pub fn keywords(&self) -> KeywordList {
        resolve_keywords(&self.research, Some(&self.requested))
    }
}

impl ContentArgs {
    /// Read the content and research files.
    ///
    /// Command-line keywords win over `config_keywords`; when both are empty
    /// the research keywords apply.
    pub fn load(
        &self,
        config_keywords: &KeywordList,
        max_bytes: Option<usize>,
    ) -> anyhow::Result<LoadedInput> {
        let content = load_content(
            &self.file,
            self.title.as_deref(),
            self.meta.as_deref(),
            max_bytes,
        )?;

        let research = match self.research {
            Some(ref path) => {
                let text = read_input_file(path, max_bytes)?;
                ResearchContext::from_json(&text)
                    .with_context(|| format!("failed to parse {path}"))?
            }
            None => ResearchContext::default(),
        };

        let requested = match self.keywords {
            Some(ref keywords) => keywords.iter().map(String::as_str).collect(),
            None => config_keywords.clone(),
        };

        Ok(LoadedInput {
            content,
            research,
            requested,
        })
    }
}
