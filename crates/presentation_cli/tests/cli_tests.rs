//! Integration tests for the CLI binary
//!
//! Runs `fleetemit-cli` in a temporary directory so no local
//! `fleetemit.toml` is picked up. Nothing here reaches a real backend.

use std::path::Path;
use std::process::{Command, Output};

const HEADER: &str = "Type of Asset,Type of vehicle,Location,Type of fuel\n";

fn cli(dir: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fleetemit-cli"));
    command
        .current_dir(dir)
        .env_remove("ORS_API_KEY")
        .env_remove("FLEETEMIT_ORS__API_KEY")
        .env_remove("RUST_LOG");
    command
}

/// Points the client at a closed local port so every request is refused
fn offline(command: &mut Command) -> &mut Command {
    command
        .env("ORS_API_KEY", "test-key")
        .env("FLEETEMIT_ORS__BASE_URL", "http://127.0.0.1:9")
        .env("FLEETEMIT_ORS__DIRECTIONS_TIMEOUT_SECS", "2")
        .env("FLEETEMIT_ORS__GEOCODE_TIMEOUT_SECS", "2")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn parse_reads_lat_lon_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli(dir.path()).args(["parse", "12.9716, 77.5946"]).output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("77.5946,12.9716"));
}

#[test]
fn parse_rejects_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli(dir.path()).args(["parse", "Silk Board"]).output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("Not a coordinate pair"));
}

#[test]
fn run_without_api_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("trips.csv");
    std::fs::write(&input, format!("{HEADER}A,Car,B,Diesel\n")).unwrap();

    let output = cli(dir.path())
        .args(["run", "trips.csv"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ORS_API_KEY"));
}

#[test]
fn run_with_missing_columns_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("trips.csv"), "Type of Asset,Location\nA,B\n").unwrap();

    let output = offline(&mut cli(dir.path()))
        .args(["run", "trips.csv"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Type of vehicle"));
}

#[test]
fn unreachable_backend_marks_rows_as_routing_failures() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("trips.csv"),
        format!("{HEADER}\"12.97, 77.59\",Car,\"12.93, 77.62\",Diesel\n"),
    )
    .unwrap();

    let output = offline(&mut cli(dir.path()))
        .args(["run", "trips.csv", "--output", "results.csv"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("Trips: 1 (0 resolved)"));

    let results = std::fs::read_to_string(dir.path().join("results.csv")).unwrap();
    let mut lines = results.lines();
    assert!(lines.next().unwrap().starts_with("From (Asset),To (Location)"));
    let row = lines.next().unwrap();
    assert!(row.contains("Routing failed"), "{row}");
    assert!(row.starts_with("\"12.97, 77.59\",\"12.93, 77.62\",Car,Diesel"));
}

#[test]
fn json_output_goes_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("trips.csv"), HEADER).unwrap();

    let output = offline(&mut cli(dir.path()))
        .args(["run", "trips.csv", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["total_rows"], 0);
    assert!(value["results"].as_array().unwrap().is_empty());
}

#[test]
fn header_only_input_writes_header_only_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("trips.csv"), HEADER).unwrap();

    let output = offline(&mut cli(dir.path()))
        .args(["run", "trips.csv", "--output", "results.csv"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let results = std::fs::read_to_string(dir.path().join("results.csv")).unwrap();
    let lines: Vec<&str> = results.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("From (Asset),To (Location)"));
}
