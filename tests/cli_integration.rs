// Binary-level tests driving wadm against a fake directory tool on disk.
// The fake is a shell script, so these only run on unix.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

const FAKE_GAM: &str = r#"#!/bin/sh
case "$*" in
  *"show filelist"*)
    printf 'Owner,id,name\njane@x.com,abc123,Budget.xlsx\njane@x.com,def456,Notes.txt\n'
    ;;
  *"print group-members"*)
    printf 'email,role\n'
    ;;
  "update group"*" user fail@x.com")
    echo "Member not found" >&2
    exit 1
    ;;
  "update group"*)
    exit 0
    ;;
  *)
    exit 0
    ;;
esac
"#;

fn write_fake_gam(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join("gam");
    std::fs::write(&path, FAKE_GAM).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn wadm(temp: &tempfile::TempDir) -> Command {
    let gam = write_fake_gam(temp.path());
    let mut cmd = Command::cargo_bin("wadm").unwrap();
    cmd.current_dir(temp.path()).arg("--gam").arg(gam);
    cmd
}

#[test]
fn drive_files_renders_an_aligned_table() {
    let temp = tempfile::tempdir().unwrap();
    wadm(&temp)
        .args(["drive", "files", "jane@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Owner      | id     | name"))
        .stdout(predicate::str::contains("-+-"))
        .stdout(predicate::str::contains("jane@x.com | abc123 | Budget.xlsx"));
}

#[test]
fn drive_files_exports_parseable_csv() {
    let temp = tempfile::tempdir().unwrap();
    let export = temp.path().join("files.csv");
    wadm(&temp)
        .args(["drive", "files", "jane@x.com", "--export"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let text = std::fs::read_to_string(&export).unwrap();
    let table = rowboat::Table::parse(&text);
    assert_eq!(table.data().len(), 2);
    assert_eq!(table.data()[1][2], "Notes.txt");
}

#[test]
fn empty_member_listing_prints_no_data() {
    let temp = tempfile::tempdir().unwrap();
    wadm(&temp)
        .args(["group", "members", "eng@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data."))
        .stdout(predicate::str::contains("|").not());
}

#[test]
fn bulk_add_reports_per_row_outcomes() {
    let temp = tempfile::tempdir().unwrap();
    let csv = temp.path().join("members.csv");
    std::fs::write(&csv, "a@x.com,member\nbad-row\nfail@x.com\n").unwrap();

    wadm(&temp)
        .args(["group", "add", "eng@x.com", "--csv"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added a@x.com as member"))
        .stdout(predicate::str::contains("skipped: invalid identifier on row 2"))
        .stdout(predicate::str::contains("Member not found"))
        .stdout(predicate::str::contains("Succeeded: 1"))
        .stdout(predicate::str::contains("Failed: 2"));
}

#[test]
fn group_add_requires_a_user_or_a_csv() {
    let temp = tempfile::tempdir().unwrap();
    wadm(&temp)
        .args(["group", "add", "eng@x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one"));
}

#[test]
fn unknown_subcommands_are_rejected() {
    let temp = tempfile::tempdir().unwrap();
    wadm(&temp)
        .args(["frobnicate"])
        .assert()
        .failure();
}
