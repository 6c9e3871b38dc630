//! The optimization report and its text rendering.

use std::fmt::Write as _;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content::ContentRecord;
use crate::fields::{FieldOptimization, MetaDescriptionOptimization};
use crate::keywords::{KeywordAnalysis, KeywordList};
use crate::links::{ExternalLink, InternalLink};
use crate::prediction::PerformancePrediction;
use crate::readability::ReadabilityReport;
use crate::score::SeoScore;
use crate::technical::TechnicalReport;
use crate::text::TextStats;

/// Everything the engine concluded about one content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OptimizationReport {
    /// The record as supplied.
    pub original_content: ContentRecord,
    /// Keywords the record was scored against.
    pub target_keywords: KeywordList,
    /// Body text statistics.
    pub text_stats: TextStats,
    /// Title analysis.
    pub title: FieldOptimization,
    /// Meta description analysis.
    pub meta_description: MetaDescriptionOptimization,
    /// Keyword density analysis.
    pub keyword_density: KeywordAnalysis,
    /// Internal link placements.
    pub internal_links: Vec<InternalLink>,
    /// External citations.
    pub external_links: Vec<ExternalLink>,
    /// Readability classification.
    pub readability: ReadabilityReport,
    /// Aggregate score.
    pub seo_score: SeoScore,
    /// Technical checklist.
    pub technical: TechnicalReport,
    /// Performance forecast.
    pub predictions: PerformancePrediction,
}

impl OptimizationReport {
    /// Total suggestions across title, meta, keywords, and readability.
    pub fn suggestion_count(&self) -> usize {
        self.title.suggestions.len()
            + self.meta_description.field.suggestions.len()
            + self.keyword_density.suggestions.len()
            + self.readability.suggestions.len()
    }

    /// Render the fixed-layout text summary.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_summary(&mut out);
        out
    }

    fn write_summary(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "SEO Optimization Report")?;
        writeln!(out, "======================")?;
        writeln!(out)?;
        writeln!(
            out,
            "Overall SEO Score: {:.1}% (Grade: {})",
            self.seo_score.percentage, self.seo_score.grade
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "Technical SEO: {}/{} checks passed",
            self.technical.passed, self.technical.total
        )?;
        writeln!(out)?;
        writeln!(out, "Key Improvements Made:")?;
        writeln!(
            out,
            "- Title optimization: {}",
            first_or_none(&self.title.suggestions)
        )?;
        writeln!(
            out,
            "- Meta description: {}",
            first_or_none(&self.meta_description.field.suggestions)
        )?;
        writeln!(
            out,
            "- Keyword density: {} optimizations",
            self.keyword_density.suggestions.len()
        )?;
        writeln!(
            out,
            "- Internal links: {} suggestions",
            self.internal_links.len()
        )?;
        writeln!(out, "- Readability: {} score", self.readability.score)?;
        writeln!(out)?;
        writeln!(out, "Performance Predictions:")?;
        writeln!(
            out,
            "- Search ranking potential: {}",
            self.predictions.search_ranking_potential
        )?;
        write!(
            out,
            "- Estimated traffic: {}",
            self.predictions.estimated_organic_traffic
        )
    }
}

fn first_or_none(suggestions: &[String]) -> &str {
    suggestions
        .first()
        .map_or("no changes needed", String::as_str)
}
