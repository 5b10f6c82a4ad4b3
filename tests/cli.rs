use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("distortion-guard");
    cmd.env_remove("MAX_TEXT_LENGTH").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is a single JSON document")
}

#[test]
fn detect_reads_stdin() {
    let assert = cmd()
        .arg("detect")
        .write_stdin("Everyone always ignores me.")
        .assert()
        .success();
    let json = stdout_json(&assert.get_output().stdout);
    assert_eq!(json["has_cognitive_distortion"], true);
    let names: Vec<&str> = json["distortions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Overgeneralization"));
}

#[test]
fn classify_reads_files() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("entry.txt");
    std::fs::write(&path, "I am learning to code and I practice daily.\n").unwrap();

    let assert = cmd()
        .arg("classify")
        .arg(&path)
        .assert()
        .success();
    let json = stdout_json(&assert.get_output().stdout);
    assert_eq!(json["distortion"], false);
    assert_eq!(json["distortion_type"], "none");
    assert_eq!(json["objectivity_score"], 100);
    assert_eq!(json["subjectivity_score"], 0);
}

#[test]
fn blank_input_is_rejected() {
    cmd()
        .arg("detect")
        .write_stdin("   \n\t")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("text cannot be empty"));
}

#[test]
fn max_length_flag_limits_input() {
    cmd()
        .args(["--max-length", "10", "classify"])
        .write_stdin("This sentence is clearly longer than ten characters.")
        .assert()
        .failure()
        .stderr(contains("exceeds maximum length of 10"));
}

#[test]
fn max_length_env_limits_input() {
    cmd()
        .env("MAX_TEXT_LENGTH", "5")
        .arg("detect")
        .write_stdin("Everyone always ignores me.")
        .assert()
        .failure()
        .stderr(contains("exceeds maximum length of 5"));
}

#[test]
fn invalid_max_length_env_is_an_error() {
    cmd()
        .env("MAX_TEXT_LENGTH", "plenty")
        .arg("detect")
        .write_stdin("fine")
        .assert()
        .failure()
        .stderr(contains("MAX_TEXT_LENGTH"));
}

#[test]
fn missing_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .arg("detect")
        .arg(tmp.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(contains("failed to read"));
}

#[test]
fn taxonomy_lists_eleven_entries() {
    let assert = cmd().arg("taxonomy").assert().success();
    let json = stdout_json(&assert.get_output().stdout);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 11);
    assert!(entries
        .iter()
        .any(|e| e["name"] == "Catastrophizing" && e["cues"].is_array()));
}
