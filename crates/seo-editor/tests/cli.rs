//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("SEO_EDITOR_LOG_DIR", std::env::temp_dir().join("seo-editor-tests"))
        .env_remove("SEO_EDITOR_MIN_SCORE")
        .env_remove("RUST_LOG");
    cmd
}

const POST: &str = "\
# Growth Hacking for Startups

## Why it matters

Growth hacking helps startups grow. However, it takes discipline.

## Getting started

Start small and measure everything.
";

const RESEARCH: &str = r#"{
  "keywords": [{"keyword": "growth hacking"}, {"keyword": "startups"}],
  "statistics": [{"stat": "70% of startups fail due to premature scaling", "source": "Startup Genome"}],
  "expert_opinions": [{"expert": "Dr. Sarah Johnson", "title": "Research Director"}]
}"#;

/// Write the sample post (and research) into a fresh directory.
fn fixture() -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("post.md"), POST).unwrap();
    std::fs::write(dir.path().join("research.json"), RESEARCH).unwrap();
    dir
}

/// Run a command in `dir` and parse its stdout as JSON.
fn run_json(dir: &std::path::Path, args: &[&str]) -> serde_json::Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "--json"])
        .args(args)
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Optimize Command
// =============================================================================

#[test]
fn optimize_prints_report() {
    let dir = fixture();
    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "--color", "never"])
        .args(["optimize", "post.md", "--keywords", "growth hacking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SEO Optimization Report"))
        .stdout(predicate::str::contains("Overall SEO Score:"))
        .stdout(predicate::str::contains("Technical SEO: "))
        .stdout(predicate::str::contains("- Internal links: 3 suggestions"));
}

#[test]
fn optimize_json_has_full_report() {
    let dir = fixture();
    let json = run_json(
        dir.path(),
        &["optimize", "post.md", "--keywords", "growth hacking,startups"],
    );

    assert_eq!(json["original_content"]["title"], "Growth Hacking for Startups");
    assert_eq!(json["target_keywords"][0], "growth hacking");
    assert_eq!(json["title"]["keyword_present"], true);
    assert_eq!(json["keyword_density"]["keywords"].as_array().unwrap().len(), 2);
    assert_eq!(json["technical"]["checks"][3]["value"], 2);
    assert!(json["seo_score"]["total_score"].as_u64().unwrap() <= 100);
    assert!(json["seo_score"]["grade"].is_string());
}

#[test]
fn optimize_falls_back_to_research_keywords() {
    let dir = fixture();
    let json = run_json(dir.path(), &["optimize", "post.md", "--research", "research.json"]);

    assert_eq!(json["target_keywords"][0], "growth hacking");
    assert_eq!(json["target_keywords"][1], "startups");
    let external = json["external_links"].as_array().unwrap();
    assert_eq!(external.len(), 2);
    assert_eq!(external[0]["source"], "Startup Genome");
    assert_eq!(external[1]["anchor_text"], "Dr. Sarah Johnson, Research Director");
}

#[test]
fn optimize_uses_config_keywords() {
    let dir = fixture();
    std::fs::write(dir.path().join(".seo-editor.toml"), "keywords = [\"startups\"]\n").unwrap();

    let json = run_json(dir.path(), &["optimize", "post.md", "--research", "research.json"]);
    assert_eq!(json["target_keywords"].as_array().unwrap().len(), 1);
    assert_eq!(json["target_keywords"][0], "startups");
}

#[test]
fn optimize_meta_flag_sets_description() {
    let dir = fixture();
    let json = run_json(
        dir.path(),
        &[
            "optimize",
            "post.md",
            "--keywords",
            "growth hacking",
            "--meta",
            "Discover growth hacking tactics.",
        ],
    );
    assert_eq!(
        json["original_content"]["meta_description"],
        "Discover growth hacking tactics."
    );
    assert_eq!(json["meta_description"]["has_action_words"], true);
}

#[test]
fn optimize_reads_json_content_record() {
    let dir = fixture();
    std::fs::write(
        dir.path().join("post.json"),
        r#"{"title": "Rust Tips", "meta_description": "", "full_text": "Rust is great.", "word_count": 1200}"#,
    )
    .unwrap();

    let json = run_json(dir.path(), &["optimize", "post.json", "--keywords", "rust"]);
    assert_eq!(json["original_content"]["word_count"], 1200);
    assert_eq!(json["seo_score"]["components"]["content_length"], 15);
}

#[test]
fn optimize_below_min_score_fails() {
    let dir = fixture();
    cmd()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["optimize", "post.md", "--keywords", "growth hacking", "--min-score", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("(min: 99)"));
}

#[test]
fn optimize_min_score_from_config() {
    let dir = fixture();
    std::fs::write(dir.path().join(".seo.toml"), "min_score = 99\n").unwrap();
    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "--json"])
        .args(["optimize", "post.md", "--keywords", "growth hacking"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"seo_score\""));
}

#[test]
fn optimize_min_score_zero_passes() {
    let dir = fixture();
    cmd()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["optimize", "post.md", "--min-score", "0"])
        .assert()
        .success();
}

#[test]
fn optimize_missing_file_fails() {
    let dir = fixture();
    cmd()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["optimize", "missing.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn optimize_invalid_research_fails() {
    let dir = fixture();
    std::fs::write(dir.path().join("bad.json"), r#"{"statistics": 3}"#).unwrap();
    cmd()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["optimize", "post.md", "--research", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid research JSON"));
}

#[test]
fn input_limit_from_config_rejects_large_file() {
    let dir = fixture();
    std::fs::write(dir.path().join(".seo-editor.toml"), "max_input_bytes = 16\n").unwrap();
    cmd()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["optimize", "post.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Keywords and Readability Commands
// =============================================================================

#[test]
fn keywords_json_lists_densities() {
    let dir = fixture();
    let json = run_json(
        dir.path(),
        &["keywords", "post.md", "--keywords", "growth hacking,startups"],
    );

    assert!(json["total_words"].as_u64().unwrap() > 0);
    assert_eq!(json["keywords"][0]["keyword"], "growth hacking");
    assert_eq!(json["keywords"][0]["count"], 2);
    assert_eq!(json["keywords"][0]["optimal_range"]["low"], 1.0);
    assert_eq!(json["keywords"][1]["optimal_range"]["high"], 1.0);
}

#[test]
fn keywords_without_any_keywords_says_so() {
    let dir = fixture();
    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "--color", "never"])
        .args(["keywords", "post.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no target keywords"));
}

#[test]
fn readability_json_has_level() {
    let dir = fixture();
    let json = run_json(dir.path(), &["readability", "post.md"]);

    assert_eq!(json["score"], "excellent");
    assert!(json["avg_sentence_length"].as_f64().unwrap() > 0.0);
    assert!(json["suggestions"].is_array());
}

#[test]
fn readability_text_output() {
    let dir = fixture();
    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "--color", "never"])
        .args(["readability", "post.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("excellent"))
        .stdout(predicate::str::contains("words/sentence"));
}

#[cfg(feature = "mcp")]
#[test]
fn serve_help_shows_usage() {
    cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

#[test]
fn optimize_min_grade_gate() {
    let dir = fixture();
    cmd()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["optimize", "post.md", "--min-grade", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("(min: A)"));
    cmd()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["optimize", "post.md", "--min-grade", "f"])
        .assert()
        .success();
}

#[test]
fn optimize_trims_spaced_keyword_list() {
    let dir = fixture();
    let json = run_json(
        dir.path(),
        &["optimize", "post.md", "--keywords", "startups, growth hacking"],
    );

    assert_eq!(json["target_keywords"][1], "growth hacking");
    assert_eq!(json["keyword_density"]["keywords"][1]["keyword"], "growth hacking");
    assert_eq!(json["keyword_density"]["keywords"][1]["count"], 2);
}
