use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{TempDir, tempdir};

fn write_inputs(synonyms: &str, first: &str, second: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("syns.txt"), synonyms).unwrap();
    fs::write(dir.path().join("file1.txt"), first).unwrap();
    fs::write(dir.path().join("file2.txt"), second).unwrap();
    dir
}

fn run(dir: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plagcheck"))
        .args(extra)
        .arg(dir.join("syns.txt"))
        .arg(dir.join("file1.txt"))
        .arg(dir.join("file2.txt"))
        .output()
        .unwrap()
}

#[test]
fn test_prints_percentage() {
    let dir = write_inputs("run sprint jog\n", "go for a run", "go for a jog");
    let output = run(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "100%\n");
}

#[test]
fn test_disjoint_texts_print_zero() {
    let dir = write_inputs("", "a b c", "x y z");
    let output = run(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0%\n");
}

#[test]
fn test_degenerate_input_warns_but_succeeds() {
    let dir = write_inputs("", "a b c", "a b c");
    let output = run(dir.path(), &["-N", "5"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "100%\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    let expected = |name: &str| {
        format!(
            "Warning - tuple size equals or exceeds text length in '{}'",
            dir.path().join(name).display()
        )
    };
    assert_eq!(lines, vec![expected("file1.txt"), expected("file2.txt")]);
}

#[test]
fn test_quiet_mode_suppresses_warnings() {
    let dir = write_inputs("", "a b c", "a b c");
    let output = run(dir.path(), &["-q"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_zero_tuple_size_is_a_usage_error() {
    let dir = write_inputs("", "a b c", "a b c");
    let output = run(dir.path(), &["-N", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_zero_tuple_size_wins_over_missing_config() {
    let dir = write_inputs("", "a b c", "a b c");
    let missing = dir.path().join("missing.json");
    let output = run(dir.path(), &["--config", missing.to_str().unwrap(), "-N", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("tuple size must be positive"));
    assert!(!stderr.contains("missing.json"));
}

#[test]
fn test_missing_file_exits_with_one() {
    let dir = write_inputs("", "a b c", "a b c");
    fs::remove_file(dir.path().join("file2.txt")).unwrap();
    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("file2.txt"));
}

#[test]
fn test_json_output() {
    let dir = write_inputs("fast quick", "the fast fox", "the quick fox");
    let output = run(dir.path(), &["--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["percent"], 100);
    assert_eq!(value["matched_windows"], 1);
    assert_eq!(value["total_windows"], 1);
}

#[test]
fn test_config_file_sets_tuple_size() {
    let dir = write_inputs("", "go for a run", "go for a jog");
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"tuple_size": 1}"#).unwrap();

    let output = run(dir.path(), &["--config", config.to_str().unwrap()]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "75%\n");

    // An explicit tuple size wins over the config file.
    let output = run(dir.path(), &["--config", config.to_str().unwrap(), "-N", "3"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "50%\n");
}
