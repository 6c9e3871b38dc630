//! Keywords command: density table for the target keywords.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_editor_core::TextStats;
use seo_editor_core::keywords::{DensityStatus, KeywordList, analyze_keyword_density};

use super::ContentArgs;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Content, keyword, and research inputs.
    #[command(flatten)]
    pub common: ContentArgs,
}

/// Print keyword density for each target keyword.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.common.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    config_keywords: &KeywordList,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.common.file, keywords = ?args.common.keywords, "executing keywords command");

    let input = args.common.load(config_keywords, max_input_bytes)?;
    let keywords = input.keywords();
    let body = &input.content.full_text;
    let analysis = analyze_keyword_density(body, &TextStats::from_text(body), &keywords);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    if analysis.keywords.is_empty() {
        println!("{}", "no target keywords".yellow());
        return Ok(());
    }

    println!("{} ({} words)", args.common.file.bold(), analysis.total_words);
    for entry in &analysis.keywords {
        let status = match entry.status {
            DensityStatus::Optimal => entry.status.green().to_string(),
            DensityStatus::UnderOptimized => entry.status.yellow().to_string(),
            DensityStatus::OverOptimized => entry.status.red().to_string(),
        };
        println!(
            "  {:<30} {:>4}x {:>6.2}%  {} (target {}-{}%)",
            entry.keyword,
            entry.count,
            entry.density,
            status,
            entry.optimal_range.low,
            entry.optimal_range.high,
        );
    }
    for suggestion in &analysis.suggestions {
        println!("  {} {}", "->".cyan(), suggestion);
    }

    Ok(())
}
