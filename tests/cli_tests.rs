//! End-to-end tests of the metaplasmid-utils binary.
//!
//! Each test builds its inputs in a fresh temporary directory and checks the
//! files written, stdout and the exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("metaplasmid-utils").expect("binary should be built")
}

/// Glue two coverage-tagged files and check every header is annotated
#[test]
fn test_glue_command() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a_5.circular.fasta"), ">seq1\nACGT\n").unwrap();
    fs::write(dir.path().join("b_10.circular.fasta"), ">seq1\nACGT\n").unwrap();
    fs::write(dir.path().join("x.linear.fasta"), ">lin\nTTTT\n").unwrap();

    cmd()
        .arg("glue")
        .arg(dir.path())
        .arg("--sort")
        .assert()
        .success()
        .stdout(predicate::str::contains("Glued 2 records from 2 circular contig files"));

    let out = fs::read_to_string(dir.path().join("final_metaplasmid.fasta")).unwrap();
    assert_eq!(out, ">seq1_cutoff_5\nACGT\n>seq1_cutoff_10\nACGT\n");
}

#[test]
fn test_glue_command_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ab_cd.circular.fasta"), ">s\nA\n>t\nC\n").unwrap();

    let output = cmd()
        .args(["--format", "json", "glue"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["records"], 2);
    assert_eq!(summary["files"][0]["file_name"], "ab_cd.circular.fasta");
    assert_eq!(summary["files"][0]["coverage"], "cd");
}

#[test]
fn test_glue_command_rejects_truncated_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("circular.fasta"), ">s\nA\n").unwrap();

    cmd()
        .arg("glue")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid contig file name 'circular.fasta'"));
}

#[test]
fn test_insert_size_command() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pairs.txt");
    let output = dir.path().join("hist.txt");
    fs::write(&input, "0 100\n50 100\n").unwrap();

    cmd()
        .arg("insert-size")
        .arg(&input)
        .arg(&output)
        .arg("200")
        .assert()
        .success()
        .stdout("Total mate-pairs: 1\n");

    let hist = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = hist.lines().collect();
    assert_eq!(lines.len(), 200);
    assert_eq!(lines[150], "150 1");
    assert_eq!(lines.iter().filter(|l| l.ends_with(" 0")).count(), 199);
}

/// A trailing unpaired line is dropped without failing the run
#[test]
fn test_insert_size_command_odd_lines() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pairs.txt");
    fs::write(&input, "0 10\n5 10\n1 1\n").unwrap();

    cmd()
        .arg("insert-size")
        .arg(&input)
        .arg(dir.path().join("hist.txt"))
        .arg("20")
        .assert()
        .success()
        .stdout("Total mate-pairs: 1\n");
}

#[test]
fn test_insert_size_command_out_of_range() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pairs.txt");
    fs::write(&input, "0 100\n150 100\n").unwrap();

    cmd()
        .arg("insert-size")
        .arg(&input)
        .arg(dir.path().join("hist.txt"))
        .arg("200")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insert size 250"));
}

#[test]
fn test_insert_size_command_malformed() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pairs.txt");
    fs::write(&input, "0 100\nfifty 100\n").unwrap();

    cmd()
        .arg("insert-size")
        .arg(&input)
        .arg(dir.path().join("hist.txt"))
        .arg("200")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed record on line 2"));
}

#[test]
fn test_insert_size_command_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pairs.txt");
    fs::write(&input, "0 10\n5 10\n0 10\n5 10\n").unwrap();

    let output = cmd()
        .args(["-f", "json", "insert-size"])
        .arg(&input)
        .arg(dir.path().join("hist.txt"))
        .arg("30")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_mate_pairs"], 2);
    assert_eq!(report["max_len"], 30);
}

#[test]
fn test_insert_size_command_rejects_zero_max_len() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pairs.txt");
    fs::write(&input, "").unwrap();

    cmd()
        .arg("insert-size")
        .arg(&input)
        .arg(dir.path().join("hist.txt"))
        .arg("0")
        .assert()
        .failure();
}

/// A bucket count too large to allocate is reported as an error, not a crash
#[test]
fn test_insert_size_command_huge_max_len() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pairs.txt");
    fs::write(&input, "0 100\n50 100\n").unwrap();

    cmd()
        .arg("insert-size")
        .arg(&input)
        .arg(dir.path().join("hist.txt"))
        .arg("4611686018427387904")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot allocate a histogram"));
}
