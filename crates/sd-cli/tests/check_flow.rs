//! End-to-end integration tests for the check/export flow.
//!
//! Runs the real binary against diary files on disk: check → JSON report →
//! export, plus year resolution and config layering via environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn sd_binary() -> String {
    env!("CARGO_BIN_EXE_sd").to_string()
}

/// Run `sd` with the given args, HOME pointed at the temp dir so no real
/// user config leaks in.
fn run_sd(temp: &Path, args: &[&str]) -> Output {
    Command::new(sd_binary())
        .env("HOME", temp)
        .env_remove("XDG_CONFIG_HOME")
        .args(args)
        .output()
        .expect("failed to run sd")
}

fn write_diary(temp: &Path, name: &str, content: &str) -> PathBuf {
    let path = temp.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn check_passes_a_clean_diary() {
    let temp = TempDir::new().unwrap();
    let diary = write_diary(
        temp.path(),
        "diary.txt",
        "1 jun\n6:15 woke\n22:00 sleep\n2 jun\n4:15 woke\n",
    );

    let output = run_sd(
        temp.path(),
        &["check", diary.to_str().unwrap(), "--year", "2024"],
    );

    assert!(
        output.status.success(),
        "check should pass: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("polarity: ascending"), "{stdout}");
    assert!(stdout.contains("all 5 line(s) are valid"), "{stdout}");
}

#[test]
fn check_flags_problems_and_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let diary = write_diary(temp.path(), "diary.txt", "6:15 woke\n");

    let output = run_sd(
        temp.path(),
        &["check", diary.to_str().unwrap(), "--year", "2024"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("time entry needs a preceding valid date line"),
        "{stdout}"
    );
    assert!(stdout.contains("1 of 1 line(s) need correction"), "{stdout}");
}

#[test]
fn year_is_taken_from_the_filename() {
    let temp = TempDir::new().unwrap();
    // 2024 is a leap year, so 29 feb is only valid there.
    let leap = write_diary(temp.path(), "diary_2024.txt", "29 feb\n6:15 woke\n");
    let no_leap = write_diary(temp.path(), "diary_2023.txt", "29 feb\n6:15 woke\n");

    let output = run_sd(temp.path(), &["check", leap.to_str().unwrap()]);
    assert!(output.status.success());

    let output = run_sd(temp.path(), &["check", no_leap.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid date value"), "{stdout}");
}

#[test]
fn year_flag_overrides_the_filename() {
    let temp = TempDir::new().unwrap();
    let diary = write_diary(temp.path(), "diary_2023.txt", "29 feb\n6:15 woke\n");

    let output = run_sd(
        temp.path(),
        &["check", diary.to_str().unwrap(), "--year", "2024"],
    );
    assert!(output.status.success());
}

#[test]
fn json_report_round_trips_through_export() {
    let temp = TempDir::new().unwrap();
    let diary = write_diary(
        temp.path(),
        "diary.txt",
        "1 jun\n6:15 woke; 7:00 tea\n22:00 sleep\n",
    );

    let output = run_sd(
        temp.path(),
        &["check", diary.to_str().unwrap(), "--year", "2024", "--json"],
    );
    assert!(output.status.success());

    let report_path = temp.path().join("report.json");
    std::fs::write(&report_path, &output.stdout).unwrap();

    let output = run_sd(temp.path(), &["export", report_path.to_str().unwrap()]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    // Semicolon entries were normalized into their own lines.
    assert_eq!(text, "1 jun\n6:15 woke\n7:00 tea\n22:00 sleep\n");
}

#[test]
fn export_rejects_garbage_reports() {
    let temp = TempDir::new().unwrap();
    let report_path = write_diary(temp.path(), "report.json", "not json at all");

    let output = run_sd(temp.path(), &["export", report_path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a valid report"), "{stderr}");
}

#[test]
fn invalid_date_policy_comes_from_environment() {
    let temp = TempDir::new().unwrap();
    let diary = write_diary(temp.path(), "diary.txt", "31 apr\n6:15 woke\n");

    // Default policy: the invalid marker is flagged but still governs.
    let output = run_sd(
        temp.path(),
        &["check", diary.to_str().unwrap(), "--year", "2024"],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 of 2 line(s) need correction"), "{stdout}");

    // Orphan policy: the entry below it is rejected too.
    let output = Command::new(sd_binary())
        .env("HOME", temp.path())
        .env_remove("XDG_CONFIG_HOME")
        .env("SD_INVALID_DATE_POLICY", "orphan")
        .args(["check", diary.to_str().unwrap(), "--year", "2024"])
        .output()
        .expect("failed to run sd");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 of 2 line(s) need correction"), "{stdout}");
}
