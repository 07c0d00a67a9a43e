//! CLI tests for `submarine sweep`.
//!
//! Spawns the submarine binary in a temp working directory and checks stdout,
//! stderr and exit codes.

use std::process::{Command, Output};

use submarine::exit_codes;
use submarine::io::config::SubmarineConfig;
use submarine::test_support::{TestDir, sample_report};

fn sweep(dir: &TestDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_submarine"))
        .current_dir(dir.path())
        .arg("sweep")
        .args(args)
        .output()
        .expect("submarine sweep")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn default_input_and_window_print_progress_and_counter() {
    let dir = TestDir::new().expect("tempdir");
    dir.write_input("Input.txt", &sample_report()).expect("write");

    let output = sweep(&dir, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "607 (no previous) 0");
    assert_eq!(lines[2], "618 (no change) 1");
    assert_eq!(lines.last(), Some(&"Counter: 5"));
}

#[test]
fn raw_window_counts_seven() {
    let dir = TestDir::new().expect("tempdir");
    dir.write_input("depths.txt", &sample_report()).expect("write");

    let output = sweep(&dir, &["depths.txt", "--window", "1", "--quiet"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "Counter: 7\n");
}

#[test]
fn config_window_applies_without_flag() {
    let dir = TestDir::new().expect("tempdir");
    dir.write_input("Input.txt", &sample_report()).expect("write");
    let mut cfg = SubmarineConfig {
        progress: false,
        ..SubmarineConfig::default()
    };
    cfg.sweep.window = 1;
    dir.write_config(&cfg).expect("config");

    let output = sweep(&dir, &[]);

    assert_eq!(stdout(&output), "Counter: 7\n");
}

#[test]
fn json_report_carries_counts() {
    let dir = TestDir::new().expect("tempdir");
    dir.write_input("Input.txt", &sample_report()).expect("write");

    let output = sweep(&dir, &["--json"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(report["window"], 3);
    assert_eq!(report["measurements"], 10);
    assert_eq!(report["increases"], 5);
}

#[test]
fn empty_input_counts_zero() {
    let dir = TestDir::new().expect("tempdir");
    dir.write_input("Input.txt", "").expect("write");

    let output = sweep(&dir, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "Counter: 0\n");
}

#[test]
fn malformed_measurement_is_fatal() {
    let dir = TestDir::new().expect("tempdir");
    dir.write_input("Input.txt", "199\n2x0\n208\n").expect("write");

    let output = sweep(&dir, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2: '2x0'"), "{stderr}");
}

#[test]
fn missing_input_is_fatal() {
    let dir = TestDir::new().expect("tempdir");

    let output = sweep(&dir, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("read input Input.txt"), "{stderr}");
}

#[test]
fn zero_window_is_fatal() {
    let dir = TestDir::new().expect("tempdir");
    dir.write_input("Input.txt", &sample_report()).expect("write");

    let output = sweep(&dir, &["--window", "0"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("window size must be > 0"), "{stderr}");
}

#[test]
fn window_sum_overflow_is_fatal_with_diagnostic() {
    let dir = TestDir::new().expect("tempdir");
    let max = i64::MAX;
    dir.write_input("Input.txt", &format!("{max}\n{max}\n{max}\n1\n")).expect("write");

    let output = sweep(&dir, &["--quiet"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("overflows i64"), "{stderr}");
}
