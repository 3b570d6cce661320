// Integration tests for the cluster-points CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command for the binary with a throwaway HOME so no global config leaks in.
fn cluster_points(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cluster-points").expect("binary should exist");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

const SCIENCE_SHEET: [&str; 7] = [
    "mat=A", "eng=B", "kis=A-", "bio=B", "phy=C", "che=C-", "bst=B-",
];

fn grade_args(grades: &[&str]) -> Vec<String> {
    grades
        .iter()
        .flat_map(|grade| ["--grade".to_string(), grade.to_string()])
        .collect()
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cluster-points"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("KUCCPS weighted cluster points"));
}

#[test]
fn score_requires_a_sheet_or_grades() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_from_grade_flags_prints_markdown() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .arg("score")
        .args(grade_args(&SCIENCE_SHEET))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Cluster Points Report"))
        .stdout(predicate::str::contains("Aggregate: 60/84 (mean grade B)"))
        .stdout(predicate::str::contains("Kiswahili (kis): A- = 11 points"));
}

#[test]
fn raw_single_cluster_json_matches_formula() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .args(["score", "--raw", "--cluster", "10", "--format", "json"])
        .args(grade_args(&SCIENCE_SHEET))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"cluster_id\": 10"))
        .stdout(predicate::str::contains("\"sum_r\": 32"))
        .stdout(predicate::str::contains("\"weighted_points\": 33.123"))
        .stdout(predicate::str::contains("\"total_points\": 60"));
}

#[test]
fn standardized_points_are_dampened() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .args(["score", "--cluster", "10", "--format", "json"])
        .args(grade_args(&SCIENCE_SHEET))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"raw_points\": 33.123"))
        .stdout(predicate::str::contains("\"weighted_points\": 30.134"))
        .stdout(predicate::str::contains("\"tier\": \"moderately_competitive\""));
}

#[test]
fn perfect_profile_never_reaches_48() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .args(["score", "--cluster", "9", "--format", "json"])
        .args(grade_args(&[
            "mat=A", "eng=A", "kis=A", "bio=A", "phy=A", "che=A", "geo=A",
        ]))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"raw_points\": 48.0"))
        .stdout(predicate::str::contains("\"weighted_points\": 45.6"))
        .stdout(predicate::str::contains("\"tier\": \"highly_competitive\""));
}

#[test]
fn missing_mathematics_exits_with_warning() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .args(["score", "--format", "json"])
        .args(grade_args(&["eng=A", "kis=B", "bio=A"]))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"status\": \"missing_mathematics\""))
        .stderr(predicate::str::contains("Mathematics not reported"));
}

#[test]
fn unknown_cluster_is_a_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .args(["score", "--cluster", "42"])
        .args(grade_args(&SCIENCE_SHEET))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown cluster: 42"));
}

#[test]
fn malformed_grade_is_rejected() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .arg("score")
        .args(grade_args(&["mat=A", "bio=F"]))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed grade for bio"));
}

#[test]
fn duplicate_mathematics_papers_are_rejected() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .arg("score")
        .args(grade_args(&["mata=A", "matb=B", "eng=C"]))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate subject in grade sheet: mat"));
}

#[test]
fn clusters_lists_the_builtin_catalog() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .args(["clusters", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"id\": 20"))
        .stdout(predicate::str::contains("Music & Related"));
}

#[test]
fn subjects_lists_the_builtin_catalog() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .arg("subjects")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("| mat | Mathematics | Compulsory |"))
        .stdout(predicate::str::contains("| mus | Music | Languages |"));
}
