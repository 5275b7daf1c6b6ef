//! End-to-end tests for the `lectern` binary

#![allow(deprecated)]

use assert_cmd::Command;
use lectern_sqlite::fixtures::FixtureTranslation;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Setup helper: a data directory with the KJV excerpt and a config file
/// pointing at it
fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("sqlite");
    fs::create_dir(&data_dir).unwrap();
    FixtureTranslation::kjv_excerpt()
        .write(&data_dir)
        .expect("Failed to write fixture");
    fs::write(
        dir.path().join("lectern.toml"),
        format!(
            "[storage]\ndata_dir = {:?}\n\n[logging]\nlevel = \"off\"\n",
            data_dir.display().to_string()
        ),
    )
    .unwrap();
    dir
}

fn lectern(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lectern").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("LECTERN_DATA_DIR")
        .arg("-C")
        .arg(dir.path().join("lectern.toml"));
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("lectern").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_translations_json() {
    let dir = setup();
    lectern(&dir)
        .args(["translations", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"acronym\": \"KJV\""))
        .stdout(predicate::str::contains("King James Version"));
}

#[test]
fn test_books_text() {
    let dir = setup();
    lectern(&dir)
        .args(["books", "kjv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Genesis"))
        .stdout(predicate::str::contains("Exodus"))
        .stdout(predicate::str::contains("Leviticus").not());
}

#[test]
fn test_single_verse() {
    let dir = setup();
    lectern(&dir)
        .args(["verse", "KJV", "1", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "In the beginning God created the heaven and the earth.",
        ));
}

#[test]
fn test_missing_verse_fails() {
    let dir = setup();
    lectern(&dir)
        .args(["verse", "KJV", "1", "1", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Verse not found: KJV 1 1:9999"));
}

#[test]
fn test_unknown_translation_fails() {
    let dir = setup();
    lectern(&dir)
        .args(["books", "XYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Translation not found: XYZ"));
}

#[test]
fn test_data_dir_flag_overrides_config() {
    let dir = setup();
    let empty = TempDir::new().unwrap();
    lectern(&dir)
        .arg("--data-dir")
        .arg(empty.path())
        .args(["translations", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_config_show_reflects_overrides() {
    let dir = setup();
    lectern(&dir)
        .args(["--data-dir", "/srv/bibles", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data_dir = \"/srv/bibles\""))
        .stdout(predicate::str::contains("port = 8000"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("lectern").unwrap();
    cmd.current_dir(dir.path())
        .args(["-C", "does-not-exist.toml", "translations"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
