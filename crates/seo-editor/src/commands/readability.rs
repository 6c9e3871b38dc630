//! Readability command: sentence, paragraph, and transition analysis.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_editor_core::TextStats;
use seo_editor_core::readability::{ReadabilityLevel, check_readability};

use super::load_content;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// Content file (`.json` content record or markdown post).
    pub file: Utf8PathBuf,
}

/// Classify readability of a content file's body.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing readability command");

    let content = load_content(&args.file, None, None, max_input_bytes)?;
    let body = &content.full_text;
    let report = check_readability(body, &TextStats::from_text(body));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let level = match report.score {
        ReadabilityLevel::Excellent | ReadabilityLevel::Good => report.score.green().to_string(),
        ReadabilityLevel::Fair => report.score.yellow().to_string(),
        ReadabilityLevel::NeedsImprovement => report.score.red().to_string(),
    };
    println!("{} {}", args.file.bold(), level);
    println!(
        "  {} {:.1} words/sentence, {:.1} words/paragraph, {:.1}% transitions",
        "Stats:".cyan(),
        report.avg_sentence_length,
        report.avg_paragraph_length,
        report.transition_word_ratio,
    );
    for suggestion in &report.suggestions {
        println!("  {} {}", "->".cyan(), suggestion);
    }

    Ok(())
}
