//! Integration tests for config file creation and loading

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{config_path, journaler_cmd, write_config};

#[test]
fn test_first_run_creates_default_config() {
    let temp = TempDir::new().unwrap();

    journaler_cmd(temp.path())
        .args(["-e", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("creating default config"));

    let content = fs::read_to_string(config_path(temp.path())).unwrap();
    assert!(content.contains("date_file_format = \"%Y-%m-%d_%H-%M-%S\""));
    assert!(content.contains("file_extension = \".md\""));
    // EDITOR and VISUAL are cleared, so the generated file records the
    // built-in fallback, not the -e override for this run.
    assert!(content.contains("editor = \"nano\""));
    assert!(content.contains("journal_directory = \"~/journal\""));
}

#[test]
fn test_first_run_creates_timestamp_entry_under_home_journal() {
    let temp = TempDir::new().unwrap();

    journaler_cmd(temp.path())
        .args(["-e", "true"])
        .assert()
        .success();

    let journal_dir = temp.path().join("journal");
    assert!(journal_dir.is_dir());

    let entries: Vec<_> = fs::read_dir(&journal_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].ends_with(".md"));
    // Default format "%Y-%m-%d_%H-%M-%S" has a fixed width
    assert_eq!(entries[0].len(), "2025-01-17_09-30-05.md".len());
}

#[test]
fn test_second_run_keeps_existing_config() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "file_extension = \"txt\"\n");

    journaler_cmd(temp.path())
        .args(["-e", "true", "-t", "note"])
        .assert()
        .success()
        .stdout(predicate::str::contains("creating default config").not());

    // The partial file is not rewritten or completed on disk
    let content = fs::read_to_string(config_path(temp.path())).unwrap();
    assert_eq!(content, "file_extension = \"txt\"\n");
}

#[test]
fn test_partial_config_is_filled_from_defaults() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "editor = \"true\"\n");

    journaler_cmd(temp.path())
        .args(["-t", "partial"])
        .assert()
        .success();

    // Extension and journal directory come from the defaults
    assert!(temp.path().join("journal").join("partial.md").exists());
}

#[test]
fn test_malformed_config_aborts_with_parse_error() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "date_file_format = [broken\n");

    journaler_cmd(temp.path())
        .args(["-e", "true", "-t", "note"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config file"));

    // No partial config is used; nothing was created
    assert!(!temp.path().join("journal").exists());
}

#[test]
fn test_unwritable_config_location_warns_and_continues() {
    let temp = TempDir::new().unwrap();

    // Block config directory creation with a file in the way
    let blocked = temp.path().join("blocked");
    fs::write(&blocked, "").unwrap();

    let journal_dir = temp.path().join("journal");
    journaler_cmd(temp.path())
        .env("XDG_CONFIG_HOME", &blocked)
        .args(["-e", "true", "-t", "note", "-j", journal_dir.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"));

    assert!(journal_dir.join("note.md").exists());
}

#[test]
fn test_help_has_no_side_effects() {
    let temp = TempDir::new().unwrap();

    journaler_cmd(temp.path()).arg("--help").assert().success();

    assert!(!config_path(temp.path()).exists());
    assert!(!temp.path().join("journal").exists());
}
