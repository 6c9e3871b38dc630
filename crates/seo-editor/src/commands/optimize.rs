//! Optimize command: full SEO report for one piece of content.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_editor_core::{Grade, KeywordList, OptimizationReport, SeoEditor};

use super::ContentArgs;

/// Arguments for the `optimize` subcommand.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Content, keyword, and research inputs.
    #[command(flatten)]
    pub common: ContentArgs,

    /// Minimum acceptable total SEO score (0–100).
    #[arg(long)]
    pub min_score: Option<u32>,

    /// Minimum acceptable letter grade.
    #[arg(long, value_enum, ignore_case = true)]
    pub min_grade: Option<Grade>,
}

/// Score a content file and print the optimization report.
#[instrument(name = "cmd_optimize", skip_all, fields(file = %args.common.file))]
pub fn cmd_optimize(
    args: OptimizeArgs,
    global_json: bool,
    config_keywords: &KeywordList,
    config_min_score: Option<u32>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        file = %args.common.file,
        keywords = ?args.common.keywords,
        research = ?args.common.research,
        "executing optimize command"
    );

    let input = args.common.load(config_keywords, max_input_bytes)?;
    let min_score = args.min_score.or(config_min_score);

    let mut editor = SeoEditor::new();
    let report = editor.optimize(&input.content, &input.research, Some(&input.requested));
    let total = report.seo_score.total_score;
    let grade = report.seo_score.grade;

    if global_json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", args.common.file.bold());
        println!();
        println!("{}", report.render());
        print_suggestions(report);
        print_grade(grade, total);
    }

    if let Some(min) = min_score
        && total < min
    {
        bail!(
            "{} scores {} (min: {}). Apply the suggestions above and re-run.",
            args.common.file,
            total,
            min,
        );
    }
    if let Some(min) = args.min_grade
        && !grade.meets(min)
    {
        bail!(
            "{} grades {} (min: {}). Apply the suggestions above and re-run.",
            args.common.file,
            grade,
            min,
        );
    }

    Ok(())
}

fn print_suggestions(report: &OptimizationReport) {
    let sections = [
        ("Title", &report.title.suggestions),
        ("Meta description", &report.meta_description.field.suggestions),
        ("Keywords", &report.keyword_density.suggestions),
        ("Readability", &report.readability.suggestions),
    ];
    if report.suggestion_count() == 0 {
        return;
    }
    println!();
    println!("{}", "Suggestions".bold().underline());
    for (label, suggestions) in sections {
        for suggestion in suggestions {
            println!("  {} {}", format!("{label}:").cyan(), suggestion);
        }
    }
}

fn print_grade(grade: Grade, total: u32) {
    let label = format!("{total}/100 ({grade})");
    let colored = match grade {
        Grade::A | Grade::B => label.green().to_string(),
        Grade::C => label.yellow().to_string(),
        Grade::D | Grade::F => label.red().to_string(),
    };
    println!();
    println!("{} {}", "Score:".bold(), colored);
}
