//! Integration tests for the chhand CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const KABIR_DOHA: &str = "बड़ा भया तो क्या भया, जैसे पेड़ खजूर |\nपंथी को छाया नहीं, फल लागे अति दूर ||";

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_check_valid_verse_argument() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check").arg(KABIR_DOHA);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Analysis:"))
        .stdout(predicate::str::contains("Charan 1"))
        .stdout(predicate::str::contains("13 Matras (Expected 13) [OK]"))
        .stdout(predicate::str::contains("Result: VALID DOHA ✓"));
}

#[test]
fn test_check_file_input() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check").arg("-i").arg(fixture_path("kabir-doha.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Result: VALID DOHA ✓"));
}

#[test]
fn test_check_stdin_input() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check").write_stdin(KABIR_DOHA);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Result: VALID DOHA ✓"));
}

#[test]
fn test_check_invalid_verse_fails() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check").arg("-i").arg(fixture_path("broken-doha.txt"));

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("[MISMATCH]"))
        .stdout(predicate::str::contains("Result: INVALID ✗"))
        .stderr(predicate::str::contains("does not scan as a Doha"));
}

#[test]
fn test_check_json_output() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check")
        .arg("-i")
        .arg(fixture_path("kabir-doha.txt"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"))
        .stdout(predicate::str::contains("\"matras\": 13"))
        .stdout(predicate::str::contains("\"status\": \"OK\""))
        .stdout(predicate::str::contains("\"weights\""));
}

#[test]
fn test_check_json_error_output() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check").arg("-f").arg("json").arg("एक ही पंक्ति");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("\"error\""));
}

#[test]
fn test_check_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check")
        .arg("-i")
        .arg(fixture_path("kabir-doha.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Result: VALID DOHA ✓"));
}

#[test]
fn test_check_structural_error() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check").arg("सिर\u{094D}फ एक पंक\u{094D}ति");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("could not split verse into 4 charans"))
        .stdout(predicate::str::contains("Result: INVALID ✗"));
}

#[test]
fn test_check_urdu_without_transliterator() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check").arg("بڑا بھیا تو کیا بھیا");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("no transliterator is configured"));
}

#[test]
fn test_check_empty_stdin_fails() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check").write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No verse provided"));
}

#[test]
fn test_check_text_conflicts_with_input_file() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check")
        .arg("कुछ")
        .arg("-i")
        .arg(fixture_path("kabir-doha.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_check_quiet_flag_suppresses_logging() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("check").arg("-q").arg("-vv").arg(KABIR_DOHA);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Result: VALID DOHA ✓"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_count_single_line() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("count").arg("जैसे पेड़ खजूर");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("-> 11 Matras"));
}

#[test]
fn test_count_breakdown() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("count").arg("-b").arg("सत\u{094D}य");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("सत\u{094D}य -> 3 Matras"))
        .stdout(predicate::str::contains("  स -> 2"))
        .stdout(predicate::str::contains("  त\u{094D} -> 0"))
        .stdout(predicate::str::contains("  य -> 1"));
}

#[test]
fn test_count_file_counts_each_half_line() {
    // The doha fixture keeps two charans per line; count reads lines, not
    // the meter, so each line totals 24
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("count").arg("-i").arg(fixture_path("kabir-doha.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("-> 24 Matras"));
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("chhand").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("count"));
}
