//! Core library for seo-editor.
//!
//! This crate scores blog content for search-engine optimization: keyword
//! density, title and meta description fit, readability, a technical
//! checklist, and an aggregate 0--100 score with a letter grade and a
//! coarse performance forecast. It is used by the `seo-editor` CLI and MCP
//! server and by any downstream consumers.
//!
//! # Modules
//!
//! - [`engine`] - The optimization pipeline and the report cache
//! - [`content`] / [`research`] - Input records
//! - [`text`] - Sentence, paragraph, and word statistics
//! - [`keywords`] - Target keywords and density analysis
//! - [`fields`] - Title and meta description optimizers
//! - [`readability`] - Readability classification
//! - [`technical`] - Technical SEO checklist
//! - [`score`] - Aggregate score and grade
//! - [`prediction`] - Performance forecast
//! - [`links`] - Internal and external link suggestions
//! - [`report`] - The combined report and its text rendering
//! - [`markdown`] - Markdown title and frontmatter handling
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use seo_editor_core::{ContentRecord, KeywordList, ResearchContext, SeoEditor};
//!
//! let content = ContentRecord::new(
//!     "Growth Hacking Guide",
//!     "Learn growth hacking basics.",
//!     "## Intro\n\nGrowth hacking is a mindset.",
//! );
//! let mut editor = SeoEditor::new();
//! let report = editor.optimize(
//!     &content,
//!     &ResearchContext::default(),
//!     Some(&KeywordList::new(["growth hacking"])),
//! );
//! assert!(report.seo_score.total_score <= 100);
//! println!("{}", editor.format_report());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod fields;
pub mod keywords;
pub mod links;
pub mod markdown;
pub mod prediction;
pub mod readability;
pub mod report;
pub mod research;
pub mod score;
pub mod technical;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use content::ContentRecord;
pub use engine::{NO_REPORT, SeoEditor, optimize_content, resolve_keywords};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use keywords::{DensityStatus, KeywordAnalysis, KeywordList};
pub use readability::{ReadabilityLevel, ReadabilityReport};
pub use report::OptimizationReport;
pub use research::ResearchContext;
pub use score::{Grade, SeoScore};
pub use text::TextStats;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
