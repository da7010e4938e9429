/// CLI binary integration tests using assert_cmd
///
/// These tests run the binary against fixture files and check what it prints
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const CARDS: &str = r#"[
  {"id": 1, "category": "news", "title": "Beta", "date": "2024-01-01", "popularity": 5},
  {"id": 2, "category": "events", "title": "Alpha", "date": "2024-06-01", "popularity": "10"}
]"#;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_cli_without_script_prints_original_order() {
    let dir = TempDir::new().unwrap();
    let cards = write(dir.path(), "cards.json", CARDS);

    Command::new(env!("CARGO_BIN_EXE_faceted-collection"))
        .arg(&cards)
        .assert()
        .success()
        .stdout(predicate::str::contains("visible (2):"))
        .stdout(predicate::str::contains("1\tBeta"))
        .stdout(predicate::str::contains("announce:").not());
}

#[test]
fn test_cli_replays_script() {
    let dir = TempDir::new().unwrap();
    let cards = write(dir.path(), "cards.json", CARDS);
    let script = write(
        dir.path(),
        "session.txt",
        "# pick a sort, then search\nsort title\ntype alp\nwait 300\n",
    );

    Command::new(env!("CARGO_BIN_EXE_faceted-collection"))
        .arg(&cards)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("announce: Cards sorted by title."))
        .stdout(predicate::str::contains(
            "announce: Search for \"alp\" found 1 result.",
        ))
        .stdout(predicate::str::contains("visible (1):"))
        .stdout(predicate::str::contains("2\tAlpha"));
}

#[test]
fn test_cli_reads_config() {
    let dir = TempDir::new().unwrap();
    let cards = write(dir.path(), "cards.json", CARDS);
    let config = write(dir.path(), "timings.toml", "debounce_ms = 1000\n");
    let script = write(dir.path(), "session.txt", "type beta\nwait 300\nteardown\n");

    Command::new(env!("CARGO_BIN_EXE_faceted-collection"))
        .arg(&cards)
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("search=\"\""))
        .stdout(predicate::str::contains("visible (2):"));
}

#[test]
fn test_cli_rejects_bad_script() {
    let dir = TempDir::new().unwrap();
    let cards = write(dir.path(), "cards.json", CARDS);
    let script = write(dir.path(), "session.txt", "category news\nshuffle\n");

    Command::new(env!("CARGO_BIN_EXE_faceted-collection"))
        .arg(&cards)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Script error on line 2"));
}

#[test]
fn test_cli_rejects_malformed_items() {
    let dir = TempDir::new().unwrap();
    let cards = write(dir.path(), "cards.json", "{not json");

    Command::new(env!("CARGO_BIN_EXE_faceted-collection"))
        .arg(&cards)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fixture error"));
}
