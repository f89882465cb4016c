mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
  Command::cargo_bin("issue-activity-report").unwrap()
}

fn run_report(args: &[&str], issues: &[serde_json::Value]) -> serde_json::Value {
  let td = tempfile::TempDir::new().unwrap();
  let input = common::write_fixture(&td, issues);

  let out = cmd()
    .arg("--input")
    .arg(&input)
    .args(args)
    .output()
    .unwrap();

  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn stats_report_counts_each_dimension() {
  let v = run_report(&["--report", "stats"], &common::fixture_issues());

  assert_eq!(v["by_priority"], serde_json::json!({"High": 1, "Low": 1, "Medium": 1}));
  assert_eq!(v["by_severity"], serde_json::json!({"null": 1, "S1": 1, "S2": 1}));
  assert_eq!(v["by_issue_type"], serde_json::json!({"Bug": 2, "Task": 1}));
  assert_eq!(v["by_maintenance"], serde_json::json!({"false": 2, "true": 1}));
  assert_eq!(v["by_subplat"], serde_json::json!({"false": 2, "true": 1}));
}

#[test]
fn weeks_report_buckets_against_pinned_now() {
  let v = run_report(
    &["--report", "weeks", "--now-override", common::FIXED_NOW],
    &common::fixture_issues(),
  );

  let weeks = v.as_array().unwrap();
  assert_eq!(weeks.len(), 3);

  let indices: Vec<i64> = weeks.iter().map(|w| w["week"].as_i64().unwrap()).collect();
  assert_eq!(indices, vec![0, 1, 2]);

  assert!(weeks[0]["end_date"].as_str().unwrap().starts_with("2024-01-06T23:59:59.999"));
  assert!(weeks[1]["end_date"].as_str().unwrap().starts_with("2023-12-30T23:59:59.999"));
  assert!(weeks[2]["end_date"].as_str().unwrap().starts_with("2023-12-23T23:59:59.999"));

  assert_eq!(weeks[0]["issues"][0]["key"], serde_json::json!("FXA-1"));
  assert_eq!(weeks[0]["by_priority"], serde_json::json!({"High": 1}));
}

#[test]
fn months_report_buckets_by_utc_month() {
  let v = run_report(&["--report", "months"], &common::fixture_issues());

  let months = v.as_array().unwrap();
  assert_eq!(months.len(), 2);
  assert_eq!(months[0]["month"], serde_json::json!("2023-12-01"));
  assert_eq!(months[0]["issues"].as_array().unwrap().len(), 2);
  assert_eq!(months[1]["month"], serde_json::json!("2024-01-01"));
  assert_eq!(months[1]["issues"].as_array().unwrap().len(), 1);
}

#[test]
fn labels_report_excludes_qa_noise_by_default() {
  let v = run_report(&["--report", "labels"], &common::fixture_issues());
  assert_eq!(v, serde_json::json!({"maintenance": 1, "sentry": 1}));
}

#[test]
fn labels_report_accepts_custom_exclusions() {
  let v = run_report(
    &["--report", "labels", "--exclude-label", "sentry"],
    &common::fixture_issues(),
  );
  assert_eq!(v, serde_json::json!({"maintenance": 1, "qa+": 1}));
}

#[test]
fn product_report_splits_on_the_component() {
  let v = run_report(&["--report", "product"], &common::fixture_issues());

  assert_eq!(v["subplat"]["count"], serde_json::json!(1));
  assert_eq!(v["rest"]["count"], serde_json::json!(2));
  assert_eq!(v["subplat"]["by_priority"], serde_json::json!({"High": 1}));
}

#[test]
fn sanitize_strips_pii_from_bucket_members() {
  let v = run_report(
    &["--report", "weeks", "--now-override", common::FIXED_NOW, "--sanitize"],
    &common::fixture_issues(),
  );

  let first = &v.as_array().unwrap()[0]["issues"][0];
  assert!(first.get("assignee").is_none());
  assert!(first.get("reporter").is_none());
  assert!(first.get("summary").is_none());
  assert_eq!(first["key"], serde_json::json!("FXA-1"));
}

#[test]
fn malformed_record_fails_the_run_by_default() {
  let mut issues = common::fixture_issues();
  issues[1]["fields"]["created"] = serde_json::json!("not-a-date");

  let td = tempfile::TempDir::new().unwrap();
  let input = common::write_fixture(&td, &issues);

  cmd()
    .arg("--input")
    .arg(&input)
    .assert()
    .failure()
    .stderr(predicate::str::contains("parsing issue FXA-2"));
}

#[test]
fn skip_invalid_drops_the_bad_record_and_continues() {
  let mut issues = common::fixture_issues();
  issues[1]["fields"]["created"] = serde_json::json!("not-a-date");

  let v = run_report(&["--report", "stats", "--skip-invalid"], &issues);
  assert_eq!(v["by_priority"].as_object().unwrap().values().map(|n| n.as_u64().unwrap()).sum::<u64>(), 2);
}

#[test]
fn empty_input_produces_empty_but_complete_reports() {
  let v = run_report(&["--report", "stats"], &[]);
  assert_eq!(v.as_object().unwrap().len(), 6);
  assert_eq!(v["by_severity"], serde_json::json!({}));

  let v = run_report(&["--report", "weeks", "--now-override", common::FIXED_NOW], &[]);
  assert_eq!(v, serde_json::json!([]));

  let v = run_report(&["--report", "labels"], &[]);
  assert_eq!(v, serde_json::json!({}));
}

#[test]
fn out_flag_writes_the_report_to_a_file() {
  let td = tempfile::TempDir::new().unwrap();
  let input = common::write_fixture(&td, &common::fixture_issues());
  let out = td.path().join("report.json");

  cmd()
    .arg("--input")
    .arg(&input)
    .arg("--out")
    .arg(&out)
    .assert()
    .success();

  let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
  assert_eq!(v.as_object().unwrap().len(), 6);
}

#[test]
fn missing_source_selection_is_an_error() {
  cmd()
    .env_remove("JIRA_SERVER")
    .env_remove("JIRA_EMAIL")
    .env_remove("JIRA_TOKEN")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Provide --input"));
}

#[test]
fn unreadable_input_is_an_error_with_path_context() {
  cmd()
    .arg("--input")
    .arg("definitely/not/here.json")
    .assert()
    .failure()
    .stderr(predicate::str::contains("here.json"));
}
