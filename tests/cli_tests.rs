//! CLI integration tests.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn pricing() -> Command {
    cargo_bin_cmd!("condotel-pricing")
}

fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_help_lists_commands() {
    pricing()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("quote"))
        .stdout(predicate::str::contains("stay"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_quote_from_file() {
    let request = temp_file(
        ".json",
        r#"{"pricePerNight": 1000000, "promotion": {"discountPercentage": 20}}"#,
    );

    pricing()
        .args(["quote", "--on", "2025-03-10", "--input"])
        .arg(request.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-10"))
        .stdout(predicate::str::contains("800000"))
        .stdout(predicate::str::contains("200000"));
}

#[test]
fn test_quote_from_stdin_as_json() {
    let output = pricing()
        .args(["quote", "--json", "--on", "2025-03-10"])
        .write_stdin(r#"{"pricePerNight": 1500000, "promotion": {"discountAmount": 2000000}}"#)
        .output()
        .expect("run condotel-pricing");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(report["referenceDate"], "2025-03-10");
    assert_eq!(report["currency"], "VND");
    assert_eq!(report["finalPrice"], "0");
    assert_eq!(report["discountAmount"], "1500000");
}

#[test]
fn test_stay_table() {
    let request = temp_file(
        ".json",
        r#"{
            "pricePerNight": 1000000,
            "promotion": {"discountPercentage": 50, "startDate": "2025-03-01", "endDate": "2025-03-01"},
            "checkIn": "2025-03-01",
            "checkOut": "2025-03-03"
        }"#,
    );

    pricing()
        .args(["stay", "--input"])
        .arg(request.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 nights"))
        .stdout(predicate::str::contains("1500000"));
}

#[test]
fn test_empty_stay_fails() {
    pricing()
        .arg("stay")
        .write_stdin(r#"{"pricePerNight": 1, "checkIn": "2025-03-03", "checkOut": "2025-03-01"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be after check-in"));
}

#[test]
fn test_check_config_valid() {
    let config = temp_file(".toml", "[pricing]\ncurrency = \"USD\"\nminor_units = 2\n");

    pricing()
        .args(["check", "config", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"))
        .stdout(predicate::str::contains("USD"));
}

#[test]
fn test_check_config_invalid_exits_nonzero() {
    let config = temp_file(".toml", "[pricing]\nminor_units = 99\n");

    pricing()
        .args(["check", "config", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for minor_units"));
}

#[test]
fn test_malformed_request_fails() {
    pricing()
        .arg("quote")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON parsing error"));
}

#[test]
fn test_log_level_override() {
    pricing()
        .args(["quote", "--on", "2025-03-10", "--log-level", "debug"])
        .write_stdin(r#"{"pricePerNight": 1000000}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("1000000"));
}

#[test]
fn test_blank_log_level_fails() {
    pricing()
        .args(["quote", "--log-level", " "])
        .write_stdin(r#"{"pricePerNight": 1000000}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field: level"));
}

#[test]
fn test_stay_accepts_timestamp_dates() {
    pricing()
        .args(["stay", "--json"])
        .write_stdin(
            r#"{"pricePerNight": 100, "checkIn": "2025-01-10T00:00:00Z", "checkOut": "2025-01-12T09:00:00+07:00"}"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("\"baseTotal\": \"200\""));
}
