//! Tests for exit codes and stdout of the CLI

use super::helpers::{path_str, run_skillscan, stdout, write_fixture};
use tempfile::TempDir;

#[test]
fn test_sample_resume_prints_skills_in_vocabulary_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        &temp_dir,
        "resume.txt",
        b"I know Python, Flask, and Docker. I also used REST APIs and TensorFlow.",
    );

    let output = run_skillscan(&[path_str(&path)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "python,flask,docker,rest apis,tensorflow\n");
}

#[test]
fn test_no_matches_prints_empty_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "notes.txt", b"Shopping list: eggs, milk.");

    let output = run_skillscan(&[path_str(&path)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = run_skillscan(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage: skillscan"));
}

#[test]
fn test_two_arguments_prints_usage() {
    let output = run_skillscan(&["a.txt", "b.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage: skillscan"));
}

#[test]
fn test_missing_file_prints_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let output = run_skillscan(&[path_str(&missing)]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.starts_with("Error reading file: "), "unexpected output: {out}");
    assert!(out.contains("missing.txt"));
}

#[test]
fn test_invalid_utf8_prints_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "latin1.txt", b"caf\xe9 python");

    let output = run_skillscan(&[path_str(&path)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Error reading file: "));
}

#[test]
fn test_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "resume.txt", b"C++ and Node.js");

    let output = run_skillscan(&["--format", "json", path_str(&path)]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["skills"], serde_json::json!(["c++", "node.js"]));
    assert_eq!(value["file"], path_str(&path));
}

#[test]
fn test_vocabulary_flag() {
    let temp_dir = TempDir::new().unwrap();
    let vocab = write_fixture(&temp_dir, "skills.toml", b"skills = [\"rust\", \"python\"]\n");
    let path = write_fixture(&temp_dir, "resume.txt", b"Python and Rust, some Docker");

    let output = run_skillscan(&["--vocabulary", path_str(&vocab), path_str(&path)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "rust,python\n");
}

#[test]
fn test_empty_vocabulary_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let vocab = write_fixture(&temp_dir, "skills.toml", b"skills = []\n");
    let path = write_fixture(&temp_dir, "resume.txt", b"python");

    let output = run_skillscan(&["--vocabulary", path_str(&vocab), path_str(&path)]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Vocabulary contains no skills\n");
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "resume.txt", b"AWS");

    let output = run_skillscan(&["-vv", path_str(&path)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "aws\n");
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_help_exits_zero() {
    let output = run_skillscan(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("FILE_PATH"));
}

#[test]
fn test_job_comparison() {
    let temp_dir = TempDir::new().unwrap();
    let resume = write_fixture(&temp_dir, "resume.txt", b"Python, Flask and Docker");
    let job = write_fixture(&temp_dir, "job.txt", b"Needs Docker, AWS and Python");

    let output = run_skillscan(&["--job", path_str(&job), path_str(&resume)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "matched: python,docker\nmissing: aws\nscore: 67%\n"
    );
}

#[test]
fn test_job_comparison_json() {
    let temp_dir = TempDir::new().unwrap();
    let resume = write_fixture(&temp_dir, "resume.txt", b"React and CSS");
    let job = write_fixture(&temp_dir, "job.txt", b"React, HTML, CSS, JavaScript");

    let output = run_skillscan(&[
        "--job",
        path_str(&job),
        "--format",
        "json",
        path_str(&resume),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["matched_skills"], serde_json::json!(["css", "react"]));
    assert_eq!(value["missing_skills"], serde_json::json!(["html", "javascript"]));
    assert_eq!(value["match_score"], 50);
}

#[test]
fn test_missing_job_file_prints_error() {
    let temp_dir = TempDir::new().unwrap();
    let resume = write_fixture(&temp_dir, "resume.txt", b"Python");
    let job = temp_dir.path().join("job.txt");

    let output = run_skillscan(&["--job", path_str(&job), path_str(&resume)]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.starts_with("Error reading file: "));
    assert!(out.contains("job.txt"));
    assert!(!out.contains("matched:"));
}
