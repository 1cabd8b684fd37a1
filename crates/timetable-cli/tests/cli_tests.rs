//! Integration tests for the `timetable` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise add/remove/show/export
//! through the actual binary, including the schedule-file round trip and
//! error exit codes. Each test gets its own temp directory so schedule files
//! never collide.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper: a command pointed at a schedule file inside `dir`.
fn timetable(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("timetable").unwrap();
    cmd.arg("--file").arg(dir.path().join("schedule.json"));
    cmd
}

#[test]
fn add_prints_the_annotated_schedule() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .args(["add", "Math", "09:00 - 10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Math"))
        .stdout(predicate::str::contains("09:00 - 10:00"))
        .stdout(predicate::str::contains("No free slots."));
}

#[test]
fn schedule_persists_across_invocations() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .args(["add", "Math", "09:00 - 10:00"])
        .assert()
        .success();
    timetable(&dir)
        .args(["add", "Physics", "10:15 - 11:15"])
        .assert()
        .success();

    // A fresh invocation reloads the file and recomputes the free slot.
    timetable(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Math"))
        .stdout(predicate::str::contains("Physics"))
        .stdout(predicate::str::contains("10:00 - 10:15  (15 min)"));
}

#[test]
fn show_marks_conflicting_periods() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .args(["add", "A", "09:00 - 10:00"])
        .assert()
        .success();
    timetable(&dir)
        .args(["add", "B", "09:30 - 10:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("!! conflict"));
}

#[test]
fn periods_listed_in_start_order_regardless_of_add_order() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .args(["add", "Late", "14:00 - 15:00"])
        .assert()
        .success();
    timetable(&dir)
        .args(["add", "Early", "08:00 - 09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] 08:00 - 09:00  Early"))
        .stdout(predicate::str::contains("[1] 14:00 - 15:00  Late"));
}

#[test]
fn remove_targets_the_sorted_position() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .args(["add", "Late", "14:00 - 15:00"])
        .assert()
        .success();
    timetable(&dir)
        .args(["add", "Early", "08:00 - 09:00"])
        .assert()
        .success();

    // Position 0 is "Early" in the sorted view.
    timetable(&dir)
        .args(["remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Late"))
        .stdout(predicate::str::contains("Early").not());
}

#[test]
fn remove_out_of_range_fails_without_touching_the_file() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .args(["add", "Math", "09:00 - 10:00"])
        .assert()
        .success();

    timetable(&dir)
        .args(["remove", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    timetable(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Math"));
}

#[test]
fn malformed_range_fails_with_a_useful_message() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .args(["add", "Math", "9:00-10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range format"));
}

#[test]
fn blank_name_is_rejected() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .args(["add", "   ", "09:00 - 10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn show_on_missing_file_is_an_empty_schedule() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No periods scheduled."));
}

#[test]
fn export_emits_the_display_contract_json() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .args(["add", "Math", "09:00 - 10:00"])
        .assert()
        .success();
    timetable(&dir)
        .args(["add", "Physics", "10:15 - 11:15"])
        .assert()
        .success();

    let output = timetable(&dir).arg("export").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["periods"][0]["name"], "Math");
    assert_eq!(json["periods"][1]["conflict"], false);
    assert_eq!(json["free_slots"][0]["start"], "10:00");
}

#[test]
fn saved_file_contains_plain_records_without_annotations() {
    let dir = TempDir::new().unwrap();

    timetable(&dir)
        .args(["add", "A", "09:00 - 10:00"])
        .assert()
        .success();
    timetable(&dir)
        .args(["add", "B", "09:30 - 10:30"])
        .assert()
        .success();

    let raw = std::fs::read_to_string(dir.path().join("schedule.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json[0]["name"], "A");
    assert_eq!(json[0]["range"], "09:00 - 10:00");
    // Derived data is never persisted.
    assert!(json[0].get("conflict").is_none());
    assert!(!raw.contains("free_slots"));
}
