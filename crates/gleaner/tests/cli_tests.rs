//! End-to-end tests for the gleaner binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn gleaner() -> Command {
    Command::cargo_bin("gleaner").unwrap()
}

#[test]
fn test_vowels_one_per_line() {
    gleaner()
        .args(["vowels", "the quick"])
        .assert()
        .success()
        .stdout("e\nu\ni\n");
}

#[test]
fn test_vowels_joined() {
    gleaner()
        .args(["vowels", "the quick brown for jumped", "--join"])
        .assert()
        .success()
        .stdout("euiooue\n");
}

#[test]
fn test_count() {
    gleaner()
        .args(["count", "banana"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_count_ignore_case() {
    gleaner()
        .args(["--ignore-case", "count", "AbE"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_glean() {
    gleaner()
        .args(["glean", "the quick brown for jumped"])
        .assert()
        .success()
        .stdout("euiooue\n");
}

#[test]
fn test_glean_without_vowels_fails() {
    gleaner()
        .args(["glean", "rhythm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot sum an empty collection"));
}

#[test]
fn test_sum_integers() {
    gleaner()
        .args(["sum", "[1, 2, 3, 4]"])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_sum_mixed_numbers() {
    gleaner()
        .args(["sum", "[1, 2.5]"])
        .assert()
        .success()
        .stdout("3.5\n");
}

#[test]
fn test_sum_nested_repeat_over_limit_fails() {
    gleaner()
        .args(["sum", "[[0; 1000000]; 1000000]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit is 1000000"));
}

#[test]
fn test_sum_char_range() {
    gleaner()
        .args(["sum", "'a'..='m'"])
        .assert()
        .success()
        .stdout("abcdefghijklm\n");
}

#[test]
fn test_sum_empty_fails() {
    gleaner()
        .args(["sum", "[]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot sum an empty collection"));
}

#[test]
fn test_sum_invalid_expression_fails() {
    gleaner()
        .args(["sum", "[1, 2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to evaluate"));
}

#[test]
fn test_shout() {
    gleaner()
        .args(["shout", "a string obj"])
        .assert()
        .success()
        .stdout("A STRING OBJ\n");
}

#[test]
fn test_vowels_flag_overrides_default() {
    gleaner()
        .args(["--vowels", "y", "count", "rhythm"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"vowels": "aeiouy", "max_items": 5}}"#).unwrap();

    gleaner()
        .args(["--config"])
        .arg(file.path())
        .args(["count", "rhythm"])
        .assert()
        .success()
        .stdout("1\n");

    gleaner()
        .args(["--config"])
        .arg(file.path())
        .args(["sum", "1..=6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("collection has 6 items, limit is 5"));
}

#[test]
fn test_missing_config_file_fails() {
    gleaner()
        .args(["--config", "/nonexistent/gleaner.json", "count", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_non_ascii_vowel_set_fails() {
    gleaner()
        .args(["--vowels", "é", "count", "café"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid vowel set"));
}
