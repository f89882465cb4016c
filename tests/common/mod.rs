use std::path::PathBuf;

// Shared raw-issue fixtures, shaped like Jira search hits. The three-record
// set spans three weeks and two months relative to a pinned "now" of
// 2024-01-03T12:00:00Z (end of week: 2024-01-06T23:59:59.999Z).

pub const FIXED_NOW: &str = "2024-01-03T12:00:00Z";

#[allow(dead_code)]
#[allow(clippy::too_many_arguments)]
pub fn raw_issue(
  key: &str,
  issuetype: &str,
  priority: &str,
  severity: Option<&str>,
  status: &str,
  components: &[&str],
  labels: &[&str],
  created: &str,
) -> serde_json::Value {
  let components: Vec<serde_json::Value> = components.iter().map(|c| serde_json::json!({"name": c})).collect();

  let mut fields = serde_json::json!({
    "issuetype": {"name": issuetype},
    "priority": {"name": priority},
    "status": {"name": status},
    "components": components,
    "labels": labels,
    "assignee": {"displayName": "Dana Assignee"},
    "reporter": {"displayName": "Sam Reporter"},
    "summary": format!("summary for {key}"),
    "created": created,
    "updated": created,
  });

  if let Some(sev) = severity {
    fields["customfield_10319"] = serde_json::json!({"value": sev});
  }

  serde_json::json!({"key": key, "fields": fields})
}

#[allow(dead_code)]
pub fn fixture_issues() -> Vec<serde_json::Value> {
  vec![
    raw_issue(
      "FXA-1",
      "Bug",
      "High",
      Some("S1"),
      "Open",
      &["Subscription Platform"],
      &["sentry", "qa+"],
      "2024-01-04T10:00:00.000Z",
    ),
    raw_issue(
      "FXA-2",
      "Task",
      "Medium",
      None,
      "In Progress",
      &["Accounts"],
      &["maintenance"],
      "2023-12-28T10:00:00.000Z",
    ),
    raw_issue(
      "FXA-3",
      "Bug",
      "Low",
      Some("S2"),
      "Open",
      &[],
      &[],
      "2023-12-17T10:00:00.000Z",
    ),
  ]
}

#[allow(dead_code)]
pub fn write_fixture(dir: &tempfile::TempDir, issues: &[serde_json::Value]) -> PathBuf {
  let path = dir.path().join("issues.json");
  std::fs::write(&path, serde_json::to_vec_pretty(&serde_json::Value::Array(issues.to_vec())).unwrap()).unwrap();
  path
}
