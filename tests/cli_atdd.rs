#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn cluster_points(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cluster-points").expect("binary should compile");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn sample_cycle() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/kuccps-2024.toml")
}

const STRONG_SHEET: &str = r#"{
  "student_id": "KCSE-2024-0001",
  "subjects": [
    {"code": "mat", "grade": "A"},
    {"code": "eng", "grade": "A"},
    {"code": "kis", "grade": "A"},
    {"code": "his", "grade": "A"},
    {"code": "bio", "grade": "A"},
    {"code": "che", "grade": "A"},
    {"code": "phy", "grade": "A"}
  ]
}"#;

#[test]
fn score_reads_a_json_sheet() {
    let home = TempDir::new().expect("temp dir should be created");
    let dir = TempDir::new().expect("temp dir should be created");
    let sheet = dir.path().join("student.json");
    fs::write(&sheet, STRONG_SHEET).expect("sheet should write");

    cluster_points(&home)
        .arg("score")
        .arg(&sheet)
        .args(["--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"student_id\": \"KCSE-2024-0001\""))
        .stdout(predicate::str::contains("\"total_points\": 84"))
        .stdout(predicate::str::contains("\"mean_grade\": \"A\""))
        .stdout(predicate::str::contains("\"cycle\": \"KUCCPS 2025\""));
}

#[test]
fn score_reads_a_toml_sheet() {
    let home = TempDir::new().expect("temp dir should be created");
    let dir = TempDir::new().expect("temp dir should be created");
    let sheet = dir.path().join("student.toml");
    fs::write(
        &sheet,
        r#"
student_id = "T-7"
subjects = [
    { code = "MATB", grade = "b" },
    { code = "eng", grade = "C+" },
    { code = "bio", grade = "C" },
]
"#,
    )
    .expect("sheet should write");

    cluster_points(&home)
        .arg("score")
        .arg(&sheet)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Student: T-7"))
        .stdout(predicate::str::contains("Mathematics (mat): B = 9 points"));
}

#[test]
fn score_rejects_unsupported_and_missing_sheets() {
    let home = TempDir::new().expect("temp dir should be created");
    let dir = TempDir::new().expect("temp dir should be created");
    let csv = dir.path().join("grades.csv");
    fs::write(&csv, "mat,A\n").expect("csv should write");

    cluster_points(&home)
        .arg("score")
        .arg(&csv)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported input"));

    cluster_points(&home)
        .arg("score")
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn score_rejects_file_and_grade_flags_together() {
    let home = TempDir::new().expect("temp dir should be created");
    cluster_points(&home)
        .args(["score", "student.json", "--grade", "mat=A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn cycle_config_adds_recommendations() {
    let home = TempDir::new().expect("temp dir should be created");
    let dir = TempDir::new().expect("temp dir should be created");
    let sheet = dir.path().join("student.json");
    fs::write(&sheet, STRONG_SHEET).expect("sheet should write");

    cluster_points(&home)
        .arg("--config")
        .arg(sample_cycle())
        .arg("score")
        .arg(&sheet)
        .args(["--cluster", "1"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Cycle: KUCCPS 2024"))
        .stdout(predicate::str::contains("### 1 Law (44.000)"))
        .stdout(predicate::str::contains("Strong candidate for degree programmes"))
        .stdout(predicate::str::contains(
            "- University of Nairobi (cutoff 42.500, 3 programmes)",
        ))
        .stdout(predicate::str::contains("- course: Bachelor of Laws (LLB) [Degree]"));
}

#[test]
fn global_config_is_layered_under_explicit_config() {
    let home = TempDir::new().expect("temp dir should be created");
    let global_dir = home.path().join(".config/cluster-points");
    fs::create_dir_all(&global_dir).expect("global config dir should create");
    fs::write(
        global_dir.join("config.toml"),
        r#"
[cycle]
name = "Global Cycle"

[standardization]
enabled = false
"#,
    )
    .expect("global config should write");

    cluster_points(&home)
        .args(["score", "--cluster", "10", "--format", "json"])
        .args(["--grade", "mat=A", "--grade", "eng=B", "--grade", "kis=A-"])
        .args(["--grade", "bio=B", "--grade", "phy=C", "--grade", "che=C-"])
        .args(["--grade", "bst=B-"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"cycle\": \"Global Cycle\""))
        .stdout(predicate::str::contains("\"weighted_points\": 33.123"));

    let dir = TempDir::new().expect("temp dir should be created");
    let cycle = dir.path().join("cycle.toml");
    fs::write(&cycle, "[cycle]\nname = \"Override\"\n").expect("cycle config should write");

    cluster_points(&home)
        .arg("--config")
        .arg(&cycle)
        .args(["score", "--format", "json", "--grade", "mat=A"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"cycle\": \"Override\""));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    let dir = TempDir::new().expect("temp dir should be created");
    let cycle = dir.path().join("cycle.toml");
    fs::write(
        &cycle,
        r#"
[standardization.caps]
"13" = 50.0
"#,
    )
    .expect("cycle config should write");

    cluster_points(&home)
        .arg("--config")
        .arg(&cycle)
        .arg("subjects")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn configured_clusters_replace_the_catalog() {
    let home = TempDir::new().expect("temp dir should be created");
    let dir = TempDir::new().expect("temp dir should be created");
    let cycle = dir.path().join("cycle.toml");
    fs::write(
        &cycle,
        r#"
[[clusters]]
id = 30
name = "Trade & Commerce"
groups = [["mat"], ["bst"], ["eng", "kis"], ["geo", "his"]]
"#,
    )
    .expect("cycle config should write");

    cluster_points(&home)
        .arg("--config")
        .arg(&cycle)
        .arg("clusters")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("## 30 Trade & Commerce"))
        .stdout(predicate::str::contains("2. bst"))
        .stdout(predicate::str::contains("Law").not());
}

#[test]
fn batch_scores_a_directory_and_lists_failures() {
    let home = TempDir::new().expect("temp dir should be created");
    let dir = TempDir::new().expect("temp dir should be created");
    fs::create_dir_all(dir.path().join("east")).expect("nested dir should create");
    fs::write(dir.path().join("a.json"), STRONG_SHEET).expect("sheet should write");
    fs::write(
        dir.path().join("east/b.json"),
        r#"{"subjects": [{"code": "mat", "grade": "F"}]}"#,
    )
    .expect("sheet should write");
    fs::write(dir.path().join("notes.txt"), "not a sheet").expect("notes should write");

    cluster_points(&home)
        .args(["batch", "--format", "json"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("a.json"))
        .stdout(predicate::str::contains("\"total_points\": 84"))
        .stdout(predicate::str::contains("malformed grade for mat"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn batch_of_clean_sheets_succeeds() {
    let home = TempDir::new().expect("temp dir should be created");
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("a.json"), STRONG_SHEET).expect("sheet should write");
    fs::write(
        dir.path().join("b.toml"),
        "subjects = [{ code = \"mat\", grade = \"C\" }, { code = \"kis\", grade = \"B\" }]\n",
    )
    .expect("sheet should write");

    cluster_points(&home)
        .arg("batch")
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Sheets: 2 (0 failed)"))
        .stdout(predicate::str::contains("| KCSE-2024-0001 | 84 |"));
}

#[test]
fn batch_of_an_empty_directory_warns() {
    let home = TempDir::new().expect("temp dir should be created");
    let dir = TempDir::new().expect("temp dir should be created");

    cluster_points(&home)
        .arg("batch")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no grade sheets found"));
}
