// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the JSON model (canonical issues, dimension keys, stats summaries, buckets) shared by all reports
// role: model/types
// outputs: Serializable structs with stable field names; derived-flag accessors on Issue
// invariants: Derived flags are computed, never stored; counts use BTreeMap for deterministic key order
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label marking maintenance work.
pub const MAINTENANCE_LABEL: &str = "maintenance";
/// Label marking issues filed from Sentry alerts.
pub const SENTRY_LABEL: &str = "sentry";
/// Component separating Subscription Platform issues from the rest.
pub const SUBSCRIPTION_PLATFORM: &str = "Subscription Platform";

/// Canonical issue record, normalized from the raw Jira search hit.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Issue {
  pub key: String,
  pub issuetype: String,
  pub priority: String,
  pub severity: Option<String>,
  pub status: String,
  pub components: Vec<String>,
  pub labels: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reporter: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  pub created: DateTime<Utc>,
  pub updated: DateTime<Utc>,
}

impl Issue {
  pub fn has_label(&self, label: &str) -> bool {
    self.labels.iter().any(|l| l == label)
  }

  pub fn has_component(&self, component: &str) -> bool {
    self.components.iter().any(|c| c == component)
  }

  pub fn is_maintenance(&self) -> bool {
    self.has_label(MAINTENANCE_LABEL)
  }

  pub fn is_sentry(&self) -> bool {
    self.has_label(SENTRY_LABEL)
  }

  pub fn is_sub_plat(&self) -> bool {
    self.has_component(SUBSCRIPTION_PLATFORM)
  }
}

/// Observed value of a stats dimension. Absent values are a real group, not a
/// dropped record. Serializes as a JSON object key: "null", "true"/"false",
/// or the text itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DimValue {
  Null,
  Bool(bool),
  Text(String),
}

impl Serialize for DimValue {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      DimValue::Null => serializer.serialize_str("null"),
      DimValue::Bool(true) => serializer.serialize_str("true"),
      DimValue::Bool(false) => serializer.serialize_str("false"),
      DimValue::Text(t) => serializer.serialize_str(t),
    }
  }
}

impl From<bool> for DimValue {
  fn from(b: bool) -> Self {
    DimValue::Bool(b)
  }
}

impl From<&str> for DimValue {
  fn from(s: &str) -> Self {
    DimValue::Text(s.to_string())
  }
}

impl From<Option<&str>> for DimValue {
  fn from(s: Option<&str>) -> Self {
    s.map_or(DimValue::Null, DimValue::from)
  }
}

/// Per-value record counts for one dimension.
pub type DimCounts = BTreeMap<DimValue, usize>;

/// Counts across the six reporting dimensions. Every dimension is present
/// even when the collection is empty.
#[derive(Debug, Serialize, Default)]
pub struct StatsSummary {
  pub by_priority: DimCounts,
  pub by_severity: DimCounts,
  pub by_issue_type: DimCounts,
  pub by_status: DimCounts,
  pub by_maintenance: DimCounts,
  pub by_subplat: DimCounts,
}

/// One calendar week of issues. `week` counts whole weeks back from the end
/// of the current week (0 = current); the window is (end_date - 1w, end_date].
#[derive(Debug, Serialize)]
pub struct WeekBucket {
  pub week: i64,
  pub start_date: DateTime<Utc>,
  pub end_date: DateTime<Utc>,
  pub issues: Vec<Issue>,
  #[serde(flatten)]
  pub stats: StatsSummary,
}

/// One UTC calendar month of issues, keyed by the first of the month.
#[derive(Debug, Serialize)]
pub struct MonthBucket {
  pub month: String,
  pub issues: Vec<Issue>,
  #[serde(flatten)]
  pub stats: StatsSummary,
}

/// Stats for one side of the product split.
#[derive(Debug, Serialize)]
pub struct ProductGroup {
  pub count: usize,
  #[serde(flatten)]
  pub stats: StatsSummary,
}

/// The two-way product split: issues on the product component vs everything else.
#[derive(Debug, Serialize)]
pub struct ProductReport {
  pub subplat: ProductGroup,
  pub rest: ProductGroup,
}
