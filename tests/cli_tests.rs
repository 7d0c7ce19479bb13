//! Integration tests for the CLI interface
//!
//! Runs the `case-filter` binary against fixture files in a temp directory

mod common;

use assert_cmd::Command;
use common::{TestContextBuilder, SAMPLE_CASES};
use predicates::prelude::*;

fn case_filter() -> Command {
    let mut cmd = Command::cargo_bin("case-filter").unwrap();
    cmd.env_remove("CASE_FILTER_OUTPUT");
    cmd
}

fn parse_output(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn test_cli_help_flag() {
    case_filter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("filter"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_invalid_command() {
    case_filter()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_filter_by_status() {
    let ctx = TestContextBuilder::new().unwrap().with_sample_cases().build().unwrap();

    let output = case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "cases.json", "--status", "open"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = parse_output(&output);
    assert_eq!(value["count"], 1);
    assert_eq!(value["data"][0]["case_number"], "C-001");
}

#[test]
fn test_filter_by_search_is_case_insensitive() {
    let ctx = TestContextBuilder::new().unwrap().with_sample_cases().build().unwrap();

    let output = case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "cases.json", "--search", "VISA"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = parse_output(&output);
    assert_eq!(value["count"], 1);
    assert_eq!(value["data"][0]["case_number"], "C-002");
}

#[test]
fn test_filter_by_beneficiary_name() {
    let ctx = TestContextBuilder::new().unwrap().with_sample_cases().build().unwrap();

    case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "cases.json", "-s", "lopez"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C-001"))
        .stdout(predicate::str::contains("C-002").not());
}

#[test]
fn test_filter_reads_stdin() {
    case_filter()
        .args(["filter", "--cases", "-", "--assigned-to", "u1"])
        .write_stdin(SAMPLE_CASES)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("C-001"));
}

#[test]
fn test_filter_inclusive_date_bounds() {
    let ctx = TestContextBuilder::new().unwrap().with_sample_cases().build().unwrap();

    let output = case_filter()
        .current_dir(ctx.path())
        .args([
            "filter",
            "--cases",
            "cases.json",
            "--from",
            "2024-01-10",
            "--to",
            "2024-02-01",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(parse_output(&output)["count"], 2);
}

#[test]
fn test_filter_with_criteria_file() {
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_sample_cases()
        .with_file(
            "criteria.json",
            r#"{"searchTerm": "", "status": ["open"], "priority": [], "case_type": [],
                "assigned_to": [], "urgency_level": [], "date_from": null, "date_to": null}"#,
        )
        .build()
        .unwrap();

    case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "cases.json", "--criteria", "criteria.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C-001"))
        .stdout(predicate::str::contains("C-002").not());
}

#[test]
fn test_filter_envelope_without_data() {
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_file("cases.json", r#"{"count": 0, "data": null}"#)
        .build()
        .unwrap();

    let output = case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "cases.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = parse_output(&output);
    assert_eq!(value["count"], 0);
    assert_eq!(value["data"], serde_json::json!([]));
}

#[test]
fn test_config_defaults_and_yaml_output() {
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_sample_cases()
        .with_file(
            "case-filter.toml",
            "output = \"yaml\"\n\n[defaults]\nstatus = [\"closed\"]\n",
        )
        .build()
        .unwrap();

    case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "cases.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("count: 1"))
        .stdout(predicate::str::contains("C-002"));
}

#[test]
fn test_flags_override_config_defaults() {
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_sample_cases()
        .with_file("filters.yaml", "defaults:\n  status: [closed]\n")
        .build()
        .unwrap();

    case_filter()
        .current_dir(ctx.path())
        .args([
            "--config",
            "filters.yaml",
            "filter",
            "--cases",
            "cases.json",
            "--status",
            "open",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("C-001"))
        .stdout(predicate::str::contains("C-002").not());
}

#[test]
fn test_stats_over_filtered_cases() {
    let ctx = TestContextBuilder::new().unwrap().with_sample_cases().build().unwrap();

    let output = case_filter()
        .current_dir(ctx.path())
        .args(["stats", "--cases", "cases.json", "--as-of", "2024-03-20"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = parse_output(&output);
    assert_eq!(value["total_cases"], 2);
    assert_eq!(value["open_cases"], 1);
    assert_eq!(value["overdue_cases"], 1);
    assert_eq!(value["closed_this_month"], 1);
    assert_eq!(value["avg_resolution_days"], 32);
}

#[test]
fn test_missing_cases_file() {
    let ctx = TestContextBuilder::new().unwrap().build().unwrap();

    case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "missing.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn test_invalid_date_flag() {
    let ctx = TestContextBuilder::new().unwrap().with_sample_cases().build().unwrap();

    case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "cases.json", "--from", "someday"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("--from"));
}

#[test]
fn test_missing_explicit_config() {
    let ctx = TestContextBuilder::new().unwrap().with_sample_cases().build().unwrap();

    case_filter()
        .current_dir(ctx.path())
        .args(["-c", "nope.toml", "filter", "--cases", "cases.json"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_filter_passes_records_through_unchanged() {
    let records = serde_json::json!([
        {
            "id": "66a1",
            "case_number": "CASE-2024-0001",
            "title": "Housing support",
            "description": "Needs a flat",
            "status": "open",
            "priority": "High",
            "case_type": "HOUSING",
            "beneficiary_id": "b1",
            "beneficiary": {
                "id": "b1",
                "first_name": "Ana",
                "last_name": "Souza",
                "full_name": "Ana Souza",
                "current_address": "Rua 1",
                "image_url": "https://img.example/b1.png"
            },
            "assigned_to_id": "",
            "assigned_to": {"id": "", "first_name": "", "last_name": "", "email": ""},
            "estimated_duration": "3 weeks",
            "budget_allocated": "1200",
            "tags": [],
            "notes_count": 0,
            "documents_count": 0,
            "last_activity": "2024-03-02T09:00:00Z",
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": "2024-03-02T09:00:00Z"
        }
    ]);
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_file("cases.json", &records.to_string())
        .build()
        .unwrap();

    let output = case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "cases.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = parse_output(&output);
    assert_eq!(value["data"], records);
}

#[test]
fn test_filter_accepts_cases_without_urgency() {
    let ctx = TestContextBuilder::new()
        .unwrap()
        .with_file(
            "cases.json",
            r#"{"count": 2, "data": [
                {"case_number": "C-1", "title": "a", "status": "OPEN", "priority": "LOW",
                 "case_type": "VISA", "created_at": "2024-01-10T00:00:00Z"},
                {"case_number": "C-2", "title": "b", "status": "OPEN", "priority": "LOW",
                 "case_type": "VISA", "urgency_level": "IMMEDIATE",
                 "created_at": "2024-01-11T00:00:00Z"}
            ]}"#,
        )
        .build()
        .unwrap();

    let output = case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "cases.json", "--urgency", "IMMEDIATE"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = parse_output(&output);
    assert_eq!(value["count"], 1);
    assert_eq!(value["data"][0]["case_number"], "C-2");
}

#[test]
fn test_status_filter_is_exact() {
    let ctx = TestContextBuilder::new().unwrap().with_sample_cases().build().unwrap();

    let output = case_filter()
        .current_dir(ctx.path())
        .args(["filter", "--cases", "cases.json", "--status", "OPEN"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(parse_output(&output)["count"], 0);
}

#[test]
fn test_verbose_error_describes_code() {
    let ctx = TestContextBuilder::new().unwrap().build().unwrap();

    case_filter()
        .current_dir(ctx.path())
        .args(["-v", "filter", "--cases", "missing.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("E3002: Input could not be read"));
}
