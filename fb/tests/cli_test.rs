//! CLI smoke tests for the fb binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(temp: &TempDir) -> std::path::PathBuf {
    let config_path = temp.path().join("store.yml");
    let slot_path = temp.path().join("feedback.json");
    std::fs::write(&config_path, format!("slot_path: {}\n", slot_path.display())).unwrap();
    config_path
}

#[test]
fn test_add_then_list_shows_new_entry_first() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp);

    Command::cargo_bin("fb")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "add", "--mood", "5", "--comment", "Release day went smoothly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));

    Command::cargo_bin("fb")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Release day went smoothly"));
}

#[test]
fn test_stats_prints_all_five_buckets() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp);

    let mut assert = Command::cargo_bin("fb")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "stats"])
        .assert()
        .success();

    for label in ["Awful", "Bad", "Okay", "Good", "Great"] {
        assert = assert.stdout(predicate::str::contains(label));
    }
}

#[test]
fn test_add_rejects_out_of_range_mood() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp);

    Command::cargo_bin("fb")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "add", "--mood", "9", "--comment", "nope"])
        .assert()
        .failure();
}

#[test]
fn test_clear_empties_the_store() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp);

    Command::cargo_bin("fb")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "clear"])
        .assert()
        .success();

    Command::cargo_bin("fb")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No feedback yet"));
}
