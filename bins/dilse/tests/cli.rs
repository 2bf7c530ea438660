//! Smoke tests for the dilse binary, run against a throwaway store.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Id of the seeded English love quote
const LOVE_EN_ID: &str = "1000003";

fn dilse(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dilse").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("DILSE_API_URL")
        .arg("--db")
        .arg(dir.path().join("quotes.sqlite"))
        .arg("--prefs")
        .arg(dir.path().join("prefs.json"))
        .arg("--offline");
    cmd
}

#[test]
fn test_categories_lists_table() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Love"))
        .stdout(predicate::str::contains("festival"));
}

#[test]
fn test_list_requires_category() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing required argument: --category"));
}

#[test]
fn test_list_offline_shows_seeded_quotes() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["list", "--category", "Love", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Love is the greatest power in the world."));
}

#[test]
fn test_list_json_reports_origin() {
    let dir = TempDir::new().unwrap();
    let output = dilse(&dir)
        .args(["--format", "json", "list", "--category", "sad", "--lang", "gu"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["scope"], "sad/gu");
    assert_eq!(json["origin"], "local (offline)");
    assert_eq!(json["total"], 1);
}

#[test]
fn test_favorite_toggle_round_trip() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["favorite", LOVE_EN_ID])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added quote"));

    dilse(&dir)
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("Love is the greatest power"));

    dilse(&dir)
        .args(["favorite", LOVE_EN_ID])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed quote"));

    dilse(&dir)
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet"));
}

#[test]
fn test_share_prints_text_form() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["share", LOVE_EN_ID])
        .assert()
        .success()
        .stdout("\"Love is the greatest power in the world.\"\n- Anonymous\n");
}

#[test]
fn test_show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["show", "42"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Quote 42"));
}

#[test]
fn test_render_rejects_short_text() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["render", "Too short"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Quote is too short (min 10 characters)"));
}

#[test]
fn test_render_rejects_blank_text() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["render", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter quote text"));
}

#[test]
fn test_render_reports_unreadable_font() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["render", "A quote that is long enough", "--font"])
        .arg(dir.path().join("missing.ttf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.ttf"));
}

#[test]
fn test_prefs_language_persists() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["prefs", "language", "gu"])
        .assert()
        .success();

    dilse(&dir)
        .args(["--format", "json", "prefs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"app_language\": \"gu\""));

    dilse(&dir)
        .args(["prefs", "language", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language"));
}

#[test]
fn test_refresh_offline_is_skipped() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .arg("refresh")
        .assert()
        .success()
        .stderr(predicate::str::contains("Refresh skipped: offline"));
}

#[test]
fn test_list_short_category_flag() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["list", "-C", "love", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Love is the greatest power in the world."));
}

#[test]
fn test_list_category_feed_offline() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["sync", "--feed", "category", "-C", "love", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Love is the greatest power in the world."));
}

#[test]
fn test_metrics_flag_prints_counters() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["--metrics", "favorite", LOVE_EN_ID])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"favorites.toggled\": 1"))
        .stderr(predicate::str::contains("\"session_id\""));
}

#[test]
fn test_json_format_reports_errors_as_json() {
    let dir = TempDir::new().unwrap();
    dilse(&dir)
        .args(["--format", "json", "show", "42"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("\"code_str\": \"E4001\""))
        .stderr(predicate::str::contains("\"category\": \"Storage\""));
}
