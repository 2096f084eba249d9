use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SYNTHETIC: &str = "Policy No: MH12AB3456\nMake: Maruti\nFuel Type: Petrol\nNet Premium: Rs. 12,500\nRisk Start Date: 01/04/2023\n";

fn mipx() -> Command {
    Command::cargo_bin("mipx").unwrap()
}

#[test]
fn process_text_file_as_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("policy.txt");
    fs::write(&input, SYNTHETIC).unwrap();

    mipx()
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"POLICY_NO\":\"MH12AB3456\""))
        .stdout(predicate::str::contains("\"RISK_START_DATE\":\"2023-04-01\""))
        .stdout(predicate::str::contains("\"BROKER_NAME\":\"\""));
}

#[test]
fn process_reads_stdin() {
    mipx()
        .args(["process", "-", "--format", "text"])
        .write_stdin(SYNTHETIC)
        .assert()
        .success()
        .stdout(predicate::str::contains("NET_PREMIUM"))
        .stdout(predicate::str::contains("12500"))
        .stdout(predicate::str::contains("BROKER_NAME").not());
}

#[test]
fn process_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("policy.txt");
    let output = dir.path().join("out.csv");
    fs::write(&input, SYNTHETIC).unwrap();

    mipx()
        .arg("process")
        .arg(&input)
        .args(["-f", "csv", "-o"])
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.starts_with("BROKER_NAME,"));
}

#[test]
fn process_missing_file_fails() {
    mipx()
        .args(["process", "/nonexistent/policy.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn fields_lists_every_key() {
    let assert = mipx().args(["fields", "--plain"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert_eq!(stdout.lines().count(), 42);
    assert_eq!(stdout.lines().next(), Some("BROKER_NAME"));
    assert_eq!(stdout.lines().last(), Some("YEAR_OF_MANUFACTURE"));
}

#[test]
fn fields_filter_by_kind() {
    mipx()
        .args(["fields", "--plain", "--kind", "date"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RISK_START_DATE"))
        .stdout(predicate::str::contains("NET_PREMIUM").not());
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("out");
    fs::write(dir.path().join("a.txt"), SYNTHETIC).unwrap();
    fs::write(dir.path().join("b.txt"), "Make: Honda\n").unwrap();
    fs::write(dir.path().join("ignored.md"), SYNTHETIC).unwrap();

    let pattern = format!("{}/*", dir.path().display());

    mipx()
        .args(["batch", &pattern, "--summary", "-o"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    let mut lines = summary.lines();
    assert!(lines.next().unwrap().starts_with("filename,status,found_fields,BROKER_NAME"));
    assert!(lines.next().unwrap().starts_with("a.txt,success,5,"));
    assert!(lines.next().unwrap().starts_with("b.txt,success,1,"));
}

#[test]
fn batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.pdf", dir.path().display());

    mipx()
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn config_init_get_set() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let path = path.to_str().unwrap();

    mipx().args(["-c", path, "config", "init"]).assert().success();
    mipx()
        .args(["-c", path, "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    mipx()
        .args(["-c", path, "config", "get", "extraction.auto_correct"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    mipx()
        .args(["-c", path, "config", "set", "extraction.auto_correct", "false"])
        .assert()
        .success();

    mipx()
        .args(["-c", path, "config", "get", "extraction.auto_correct"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    mipx()
        .args(["-c", path, "config", "get", "extraction.nope"])
        .assert()
        .failure();
}
