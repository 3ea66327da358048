//! Tests for CLI commands: samples, inspect, save, validate, completions

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const NESTED: &str = r#"[[{"label":"Python","start":77,"end":83},{"label":"Java","start":88,"end":91}]]"#;

/// Command with an empty config file, so the user's real config is never read.
fn skillspan(dir: &TempDir) -> Command {
    let config = dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "").expect("Failed to write config");
    }
    let mut cmd = Command::cargo_bin("skillspan").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

fn setup_test_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path.to_string_lossy().to_string()
}

#[test]
fn test_samples_lists_builtin_postings() {
    let dir = tempfile::tempdir().unwrap();
    skillspan(&dir)
        .arg("samples")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Example 1: We are looking for a Senior Software Engineer with...",
        ))
        .stdout(predicate::str::contains("Example 2: Data Scientist needed."))
        .stdout(predicate::str::contains("[posting_2]"));
}

#[test]
fn test_inspect_nested_raw() {
    let dir = tempfile::tempdir().unwrap();
    skillspan(&dir)
        .args(["inspect", "-p", "1", "--raw", NESTED])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: array"))
        .stdout(predicate::str::contains("Total skills: 2"))
        .stdout(predicate::str::contains("1. Python"))
        .stdout(predicate::str::contains("Position: 77-83"))
        .stdout(predicate::str::contains("Extracted: 'Python' ✓"))
        .stdout(predicate::str::contains("Extracted: 'Jav'"))
        .stdout(predicate::str::contains("MISMATCH"))
        .stdout(predicate::str::contains("2 spans: 1 matched, 1 mismatched, 0 skipped"));
}

#[test]
fn test_inspect_reads_stdin() {
    let dir = tempfile::tempdir().unwrap();
    skillspan(&dir)
        .args(["inspect", "-p", "2", "-"])
        .write_stdin(r#"[{"label":"PyTorch","start":63,"end":70}, 5]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted: 'PyTorch' ✓"))
        .stdout(predicate::str::contains("2. 5 (unexpected format at '/1')"));
}

#[test]
fn test_inspect_lists_entries_in_raw_order() {
    let dir = tempfile::tempdir().unwrap();
    let output = skillspan(&dir)
        .args(["inspect", "--raw", r#"[5, {"label":"Python","start":77,"end":83}]"#])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. 5 (unexpected format at '/0')"));
    assert!(stdout.contains("2. Python"));
    assert!(stdout.find("1. 5").unwrap() < stdout.find("2. Python").unwrap());
}

#[test]
fn test_inspect_keeps_raw_key_order() {
    let dir = tempfile::tempdir().unwrap();
    let output = skillspan(&dir)
        .args(["inspect", "--raw", r#"[{"start":77,"label":"Python","end":83}]"#])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let start = stdout.find("\"start\"").unwrap();
    let label = stdout.find("\"label\"").unwrap();
    let end = stdout.find("\"end\"").unwrap();
    assert!(start < label && label < end, "keys reordered:\n{}", stdout);
}

#[test]
fn test_verbosity_levels() {
    let dir = tempfile::tempdir().unwrap();
    skillspan(&dir)
        .env_remove("RUST_LOG")
        .args(["-vv", "inspect", "--raw", "[5]"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping number entry at '/0'"));

    skillspan(&dir)
        .env_remove("RUST_LOG")
        .args(["-v", "inspect", "--raw", "[5]"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping number entry").not());
}

#[test]
fn test_inspect_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_test_file(&dir, "raw.json", NESTED);
    skillspan(&dir)
        .args(["inspect", file.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total skills: 2"));
}

#[test]
fn test_inspect_nothing_yet() {
    let dir = tempfile::tempdir().unwrap();
    skillspan(&dir)
        .args(["inspect", "--raw", "[]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No annotations yet"))
        .stdout(predicate::str::contains("Click words above to highlight them"));
}

#[test]
fn test_inspect_invalid_json_is_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    skillspan(&dir)
        .args(["inspect", "--raw", "[{\"label\":"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error displaying"))
        .stderr(predicate::str::contains("[{\"label\":"));
}

#[test]
fn test_inspect_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = skillspan(&dir)
        .args(["inspect", "--json", "--raw", NESTED])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["job_id"], "posting_1");
    assert_eq!(json["raw_kind"], "array");
    assert_eq!(json["summary"]["matched"], 1);
    assert_eq!(json["checks"][1]["status"], "mismatched");
    assert_eq!(json["payload"]["extracted_skills"][0]["note"], "");
}

#[test]
fn test_inspect_custom_text_utf16() {
    let dir = tempfile::tempdir().unwrap();
    skillspan(&dir)
        .args([
            "inspect",
            "--unit",
            "utf16",
            "--text",
            "Hi 👋 Rust",
            "--raw",
            r#"[{"label":"Rust","start":6,"end":10}]"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted: 'Rust' ✓"));
}

#[test]
fn test_save_payload_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let output = skillspan(&dir)
        .args(["save", "-p", "1", "--raw", NESTED])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("2 skills captured for posting_1"));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["job_id"], "posting_1");
    assert!(json["description"].as_str().unwrap().starts_with("We are looking"));
    let skills = json["extracted_skills"].as_array().unwrap();
    assert_eq!(skills.len(), 2);
    assert_eq!(
        skills[1],
        serde_json::json!({"text": "Java", "start": 88, "end": 91, "note": ""})
    );
}

#[test]
fn test_save_payload_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("saved.json");
    skillspan(&dir)
        .args(["save", "-q", "--job-id", "job-7", "--raw", NESTED, "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("skills captured").not());

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(saved["job_id"], "job-7");
}

#[test]
fn test_save_without_annotations_warns() {
    let dir = tempfile::tempdir().unwrap();
    skillspan(&dir)
        .args(["save", "--raw", "null"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Highlight some skills first"));
}

#[test]
fn test_validate_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_test_file(
        &dir,
        "reviewed.jsonl",
        concat!(
            r#"{"job_id": "posting_1", "annotations": [[{"label": "Python", "start": 77, "end": 83}]]}"#,
            "\n\n",
            r#"{"text": "Rust wanted", "annotations": [{"label": "Rust", "start": 0, "end": 3}, {"label": "x", "start": "0"}]}"#,
            "\n",
        ),
    );

    skillspan(&dir)
        .args(["validate", file.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Validated 2 entries in 1 file(s)"))
        .stdout(predicate::str::contains("3 spans: 1 matched, 1 mismatched, 1 skipped"))
        .stderr(predicate::str::contains("reviewed.jsonl:3:span[0]: 'Rust' at 0-3 reads 'Rus'"));

    skillspan(&dir)
        .args(["validate", "--strict", file.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 span mismatches"));
}

#[test]
fn test_validate_clean_file_strict() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_test_file(
        &dir,
        "clean.jsonl",
        r#"{"job_id": "posting_2", "annotations": [{"label": "SQL", "start": 72, "end": 75}]}"#,
    );

    skillspan(&dir)
        .args(["validate", "--strict", file.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("All spans match"));
}

#[test]
fn test_validate_invalid_line() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_test_file(&dir, "bad.jsonl", "{\"text\": \"a\", \"annotations\": []}\n{oops\n");

    skillspan(&dir)
        .args(["validate", file.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.jsonl:2: Invalid JSON"));
}

#[test]
fn test_validate_unknown_job_id() {
    let dir = tempfile::tempdir().unwrap();
    let file = setup_test_file(
        &dir,
        "unknown.jsonl",
        r#"{"job_id": "posting_9", "annotations": []}"#,
    );

    skillspan(&dir)
        .args(["validate", file.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unknown.jsonl:1: Invalid input: Unknown job_id 'posting_9'",
        ));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let mut cmd = Command::cargo_bin("skillspan").unwrap();
    cmd.arg("--config")
        .arg(&missing)
        .arg("samples")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_config_postings_and_unit() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup_test_file(
        &dir,
        "custom.toml",
        "offset_unit = \"byte\"\n\n[[postings]]\nid = \"posting_de\"\ntext = \"Größe und Rust\"\n",
    );

    let mut cmd = Command::cargo_bin("skillspan").unwrap();
    cmd.args(["--config", config.as_str(), "samples"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Example 1: Größe und Rust..."))
        .stdout(predicate::str::contains("posting_de"));

    // "Rust" is bytes 12..16 (ö and ß take two bytes each)
    let mut cmd = Command::cargo_bin("skillspan").unwrap();
    cmd.args([
        "--config",
        config.as_str(),
        "inspect",
        "--raw",
        r#"[{"label":"Rust","start":12,"end":16}]"#,
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Extracted: 'Rust' ✓"));
}

#[test]
fn test_bad_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup_test_file(&dir, "bad.toml", "colour = \"red\"\n");

    let mut cmd = Command::cargo_bin("skillspan").unwrap();
    cmd.args(["--config", config.as_str(), "samples"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_missing_posting_number() {
    let dir = tempfile::tempdir().unwrap();
    skillspan(&dir)
        .args(["inspect", "-p", "3", "--raw", "[]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No posting 3 (choose 1-2"));
}

#[test]
fn test_completions() {
    let dir = tempfile::tempdir().unwrap();
    skillspan(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skillspan"));
}
