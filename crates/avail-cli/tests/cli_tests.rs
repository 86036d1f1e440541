//! Integration tests for the `avail` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the windows, nearest,
//! and workdays subcommands through the actual binary, including stdin
//! piping, fixture files, `--json` output, and error handling. Every test
//! pins `--today` so the results are deterministic.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the projects.json fixture.
fn projects_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/projects.json")
}

/// Helper: path to the holidays.json fixture.
fn holidays_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/holidays.json")
}

/// Helper: read the projects.json fixture as a string.
fn projects_json() -> String {
    std::fs::read_to_string(projects_path()).expect("projects.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Windows subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn windows_stdin_to_stdout() {
    Command::cargo_bin("avail")
        .unwrap()
        .args(["windows", "--today", "2025-06-14"])
        .write_stdin(projects_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("Andi"))
        .stdout(predicate::str::contains("15 Jun 25"));
}

#[test]
fn windows_from_fixture_file() {
    // Citra's only record has an unusable start date, so Citra is fully
    // available for the rest of the year.
    Command::cargo_bin("avail")
        .unwrap()
        .args(["windows", "-i", projects_path(), "--today", "2025-06-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Citra"))
        .stdout(predicate::str::contains("31 Dec 25"));
}

#[test]
fn windows_json_output_is_structured() {
    let output = Command::cargo_bin("avail")
        .unwrap()
        .args([
            "windows",
            "-i",
            projects_path(),
            "--today",
            "2025-06-14",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let windows: serde_json::Value =
        serde_json::from_slice(&output).expect("--json output must be valid JSON");
    let windows = windows.as_array().expect("JSON output must be an array");

    // 4 PICs: (No PIC) and Andi and Budi each split around one commitment,
    // Citra has a single full-span window. 2 + 2 + 2 + 1 = 7.
    assert_eq!(windows.len(), 7);
    for w in windows {
        assert!(w.get("owner").is_some());
        assert!(w.get("start").is_some());
        assert!(w.get("end").is_some());
        assert!(w.get("workdays").is_some());
    }

    // Owner-ascending grouping: "(No PIC)" sorts before the named PICs.
    assert_eq!(windows[0]["owner"], "(No PIC)");
}

// ─────────────────────────────────────────────────────────────────────────────
// Nearest subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn nearest_emits_one_window_per_pic() {
    let output = Command::cargo_bin("avail")
        .unwrap()
        .args([
            "nearest",
            "-i",
            projects_path(),
            "--today",
            "2025-06-14",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let windows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let windows = windows.as_array().unwrap();

    // All four PICs are free starting tomorrow.
    assert_eq!(windows.len(), 4);
    for w in windows {
        assert_eq!(w["start"], "2025-06-15");
    }
}

#[test]
fn nearest_respects_holiday_calendar() {
    // Tomorrow (Sun Jun 15) through Jun 19 for Andi: Mon-Thu minus no
    // holidays = 4 workdays; the holiday list leaves that span untouched,
    // but the trailing window loses Dec 25.
    Command::cargo_bin("avail")
        .unwrap()
        .args([
            "nearest",
            "-i",
            projects_path(),
            "--today",
            "2025-06-14",
            "--holidays",
            holidays_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(4 wd)"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Workdays subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn workdays_counts_weekdays_only() {
    // Sat, Sun, Mon: one workday.
    Command::cargo_bin("avail")
        .unwrap()
        .args(["workdays", "--start", "2025-06-14", "--end", "2025-06-16"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));
}

#[test]
fn workdays_excludes_listed_holidays() {
    // Mon Dec 22 .. Fri Dec 26, with Dec 25 a holiday.
    Command::cargo_bin("avail")
        .unwrap()
        .args([
            "workdays",
            "--start",
            "2025-12-22",
            "--end",
            "2025-12-26",
            "--holidays",
            holidays_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("4\n"));
}

#[test]
fn workdays_inverted_range_is_zero() {
    Command::cargo_bin("avail")
        .unwrap()
        .args(["workdays", "--start", "2025-06-20", "--end", "2025-06-10"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_input_file_fails_with_context() {
    Command::cargo_bin("avail")
        .unwrap()
        .args(["windows", "-i", "/nonexistent/projects.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn malformed_records_json_fails_with_context() {
    Command::cargo_bin("avail")
        .unwrap()
        .args(["windows", "--today", "2025-06-14"])
        .write_stdin("{ this is not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse records JSON"));
}

#[test]
fn invalid_holiday_list_fails_with_context() {
    let path = "/tmp/avail-test-bad-holidays.json";
    std::fs::write(path, r#"["2025-01-01", "25/12/2025"]"#).unwrap();

    Command::cargo_bin("avail")
        .unwrap()
        .args([
            "windows",
            "-i",
            projects_path(),
            "--today",
            "2025-06-14",
            "--holidays",
            path,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid holiday list"));
}

#[test]
fn invalid_today_flag_is_rejected_by_clap() {
    Command::cargo_bin("avail")
        .unwrap()
        .args(["windows", "--today", "14/06/2025"])
        .assert()
        .failure();
}
