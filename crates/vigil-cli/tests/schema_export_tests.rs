// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! End-to-end tests for the schema export commands.

use assert_cmd::Command;

fn vigil() -> Command {
    Command::cargo_bin("vigil").unwrap()
}

#[test]
fn export_writes_every_snapshot_and_latest() {
    let dir = tempfile::tempdir().unwrap();

    vigil()
        .args(["schema", "export", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();

    for name in ["1.0.0.json", "1.0.1.json", "1.0.2.json", "latest.json"] {
        assert!(dir.path().join(name).exists(), "{name} should be written");
    }
}

#[test]
fn export_single_version_writes_only_that_snapshot() {
    let dir = tempfile::tempdir().unwrap();

    vigil()
        .args(["schema", "export", "--schema-version", "1.0.1", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("1.0.1.json").exists());
    assert!(!dir.path().join("1.0.0.json").exists());
    assert!(!dir.path().join("latest.json").exists());
}

#[test]
fn export_latest_version_also_writes_the_alias() {
    let dir = tempfile::tempdir().unwrap();

    vigil()
        .args(["schema", "export", "--schema-version", "1.0.2", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let stamped = std::fs::read(dir.path().join("1.0.2.json")).unwrap();
    let alias = std::fs::read(dir.path().join("latest.json")).unwrap();
    assert_eq!(stamped, alias);
}

#[test]
fn export_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();

    for _ in 0..2 {
        vigil()
            .args(["schema", "export", "--out-dir"])
            .arg(dir.path())
            .assert()
            .success();
    }

    let first_run = tempfile::tempdir().unwrap();
    vigil()
        .args(["schema", "export", "--out-dir"])
        .arg(first_run.path())
        .assert()
        .success();

    let a = std::fs::read(dir.path().join("latest.json")).unwrap();
    let b = std::fs::read(first_run.path().join("latest.json")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn export_unknown_version_fails() {
    let dir = tempfile::tempdir().unwrap();

    vigil()
        .args(["schema", "export", "--schema-version", "9.9.9", "--out-dir"])
        .arg(dir.path())
        .assert()
        .failure();
}

#[test]
fn print_emits_parseable_draft7_json() {
    let output = vigil().args(["schema", "print"]).assert().success();
    let stdout = &output.get_output().stdout;

    let doc: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    assert_eq!(doc["$schema"], "http://json-schema.org/draft-07/schema#");
    assert_eq!(doc["version"], "1.0.2");
}

#[test]
fn versions_lists_all_snapshots() {
    let output = vigil().args(["schema", "versions"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    for version in ["1.0.0", "1.0.1", "1.0.2"] {
        assert!(stdout.contains(version));
    }
    assert!(stdout.contains("1.0.2 (latest)"));
}
