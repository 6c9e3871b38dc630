//! The optimization engine.
//!
//! [`optimize_content`] is the pure pipeline: text statistics first, then
//! the four independent analyzers (keyword density, field optimizers,
//! readability, technical checklist), then the aggregate score and the
//! forecast built on it.
//!
//! [`SeoEditor`] wraps the pipeline and keeps the most recent report so
//! [`SeoEditor::format_report`] can render it without the inputs. The
//! cache is plain instance state behind `&mut self`; share an editor
//! across threads only behind your own lock, or use one per caller.

use crate::content::ContentRecord;
use crate::fields::{optimize_meta_description, optimize_title};
use crate::keywords::{KeywordList, analyze_keyword_density};
use crate::links::{suggest_external_links, suggest_internal_links};
use crate::prediction::predict_performance;
use crate::readability::check_readability;
use crate::report::OptimizationReport;
use crate::research::ResearchContext;
use crate::score::calculate_seo_score;
use crate::technical::check_technical;
use crate::text::TextStats;

/// Returned by [`SeoEditor::format_report`] before any content was optimized.
pub const NO_REPORT: &str = "No optimization data available";

/// Score `content` against `keywords`.
///
/// Deterministic: identical inputs always produce identical reports.
#[tracing::instrument(skip_all, fields(keywords = keywords.len(), words = content.word_count))]
pub fn optimize_content(
    content: &ContentRecord,
    keywords: &KeywordList,
    research: &ResearchContext,
) -> OptimizationReport {
    let stats = TextStats::from_text(&content.full_text);

    let keyword_density = analyze_keyword_density(&content.full_text, &stats, keywords);
    let title = optimize_title(&content.title, keywords);
    let meta_description = optimize_meta_description(&content.meta_description, keywords);
    let readability = check_readability(&content.full_text, &stats);
    let technical = check_technical(content);

    let seo_score = calculate_seo_score(content, keywords);
    let predictions = predict_performance(content, &seo_score);

    tracing::info!(
        total_score = seo_score.total_score,
        grade = seo_score.grade.as_str(),
        technical_passed = technical.passed,
        readability = readability.score.as_str(),
        "content optimized"
    );

    OptimizationReport {
        original_content: content.clone(),
        target_keywords: keywords.clone(),
        text_stats: stats,
        title,
        meta_description,
        keyword_density,
        internal_links: suggest_internal_links(),
        external_links: suggest_external_links(research),
        readability,
        seo_score,
        technical,
        predictions,
    }
}

/// Explicit keywords win; when absent or empty, fall back to research.
pub fn resolve_keywords(research: &ResearchContext, target: Option<&KeywordList>) -> KeywordList {
    match target {
        Some(list) if !list.is_empty() => list.clone(),
        _ => research.keyword_list(),
    }
}

/// Stateful front end to [`optimize_content`] that remembers the last report.
#[derive(Debug, Default)]
pub struct SeoEditor {
    last_report: Option<OptimizationReport>,
}

impl SeoEditor {
    /// Create an editor with no report yet.
    pub const fn new() -> Self {
        Self { last_report: None }
    }

    /// Optimize `content`, replacing the cached report.
    ///
    /// When `target_keywords` is `None` or empty, the research context's
    /// keyword suggestions are used in order.
    pub fn optimize(
        &mut self,
        content: &ContentRecord,
        research: &ResearchContext,
        target_keywords: Option<&KeywordList>,
    ) -> &OptimizationReport {
        let keywords = resolve_keywords(research, target_keywords);
        tracing::debug!(keywords = ?keywords.as_slice(), "optimizing content");
        self.last_report
            .insert(optimize_content(content, &keywords, research))
    }

    /// The most recent report, if any.
    pub const fn last_report(&self) -> Option<&OptimizationReport> {
        self.last_report.as_ref()
    }

    /// Render the most recent report, or [`NO_REPORT`] if there is none.
    pub fn format_report(&self) -> String {
        self.last_report
            .as_ref()
            .map_or_else(|| NO_REPORT.to_string(), OptimizationReport::render)
    }
}
