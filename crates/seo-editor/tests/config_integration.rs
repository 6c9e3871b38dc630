//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary, logging under the temp dir.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("SEO_EDITOR_LOG_DIR", std::env::temp_dir().join("seo-editor-tests"))
        .env_remove("SEO_EDITOR_MIN_SCORE")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
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
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
    assert!(json["config"]["keywords"].is_null());
    assert!(json["config"]["min_score"].is_null());
    assert_eq!(json["config"]["max_input_bytes"], 5 * 1024 * 1024);
}

#[test]
fn discovers_short_dotfile_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seo.toml"), "min_score = 65").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["min_score"], 65);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".seo.toml"), "should report dotfile: {reported}");
}

#[test]
fn discovers_regular_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("seo-editor.toml"), r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("seo-editor.toml"));
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("posts").join("drafts");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(
        tmp.path().join(".seo-editor.toml"),
        "keywords = [\"growth hacking\", \"startup growth\"]\n",
    )
    .unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["keywords"][0], "growth hacking");
    assert_eq!(json["config"]["keywords"][1], "startup growth");
}

#[test]
fn long_name_overrides_short_name() {
    let tmp = TempDir::new().unwrap();

    fs::write(tmp.path().join("seo.toml"), "min_score = 50").unwrap();
    fs::write(tmp.path().join(".seo-editor.toml"), "min_score = 80").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["min_score"], 80);
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seo-editor.yaml"),
        "keywords:\n  - rust\nmin_score: 70\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["keywords"][0], "rust");
    assert_eq!(json["config"]["min_score"], 70);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seo-editor.json"),
        r#"{"log_level": "error", "disable_input_limit": true}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
    assert!(json["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join(".seo-editor.toml"), "min_score = 90").unwrap();
    fs::write(sub_dir.join(".seo-editor.toml"), "min_score = 40").unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(json["config"]["min_score"], 40, "closer config should win");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seo-editor.toml"), "min_score = 60").unwrap();

    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "min_score = 75").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["min_score"], 75);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"));
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seo-editor.toml"), "min_score = 60").unwrap();

    let output = cmd()
        .env("SEO_EDITOR_MIN_SCORE", "85")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["min_score"], 85);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seo-editor.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn wrong_field_type_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seo-editor.toml"), r#"min_score = "high""#).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seo-editor.toml"),
        "log_level = \"info\"\ntoken_budget = 42\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "info");
}

// =============================================================================
// Boundary Marker
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();

    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("posts");
    fs::create_dir_all(&src).unwrap();

    fs::write(parent.join(".seo-editor.toml"), "min_score = 99").unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);

    assert!(json["config"]["min_score"].is_null());
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("posts");
    fs::create_dir_all(&src).unwrap();

    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".seo.yaml"), "min_score: 55\n").unwrap();

    let json = info_json(&src);
    assert_eq!(json["config"]["min_score"], 55);
}
