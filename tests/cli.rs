use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn termswap() -> Command {
    Command::cargo_bin("termswap").unwrap()
}

#[test]
fn renames_tree_into_sibling_output() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store");
    fs::create_dir(&store).unwrap();
    fs::write(
        store.join("ride.ts"),
        "export interface Ride { rideId: string; rides: Ride[]; }",
    )
    .unwrap();

    termswap()
        .arg(&store)
        .args(["--original", "ride", "--replacement", "trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ride.ts → trip.ts"))
        .stdout(predicate::str::contains("saved in"));

    let output = dir.path().join("store_output_trip").join("trip.ts");
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "export interface Trip { TripId: string; trips: Trip[]; }"
    );
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store");
    fs::create_dir(&store).unwrap();
    fs::write(store.join("ride.ts"), "let ride = 1;").unwrap();

    termswap()
        .arg(&store)
        .args(["--original", "ride", "--replacement", "trip", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ride.ts → trip.ts"))
        .stdout(predicate::str::contains("Dry-run complete"));

    assert!(!dir.path().join("store_output_trip").exists());
}

#[test]
fn json_format_emits_one_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store");
    fs::create_dir(&store).unwrap();
    fs::write(store.join("ride.ts"), "let ride = 1;").unwrap();

    let assert = termswap()
        .arg(&store)
        .args([
            "--original",
            "ride",
            "--replacement",
            "trip",
            "--dry-run",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["dry_run"], true);
    assert_eq!(doc["files_processed"], 1);
    assert_eq!(doc["files"][0]["new_name"], "trip.ts");
}

#[test]
fn missing_root_fails_before_processing() {
    let dir = tempfile::tempdir().unwrap();

    termswap()
        .arg(dir.path().join("nope"))
        .args(["--original", "ride", "--replacement", "trip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("folder not found"));
}

#[test]
fn empty_term_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store");
    fs::create_dir(&store).unwrap();

    termswap()
        .arg(&store)
        .args(["--original", "", "--replacement", "trip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid term"));
}
