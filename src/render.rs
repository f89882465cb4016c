use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::labels::{label_index, split_by_product};
use crate::model::{Issue, ProductGroup, ProductReport};
use crate::stats::issue_stats;
use crate::util::effective_now;
use crate::window::{end_of_week, group_by_month, group_by_week};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ReportKind {
  Stats,
  Weeks,
  Months,
  Labels,
  Product,
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
  /// Timezone for end-of-week weekday detection ("utc", "local", or IANA name).
  pub tz: String,
  /// Reference instant for week bucketing; None means the wall clock.
  pub now: Option<DateTime<Utc>>,
  /// Labels removed from the labels report.
  pub excluded_labels: Vec<String>,
  /// Component defining the product split.
  pub product_component: String,
}

/// Build the requested report as a plain JSON value. Pure: no I/O, no
/// printing; the caller decides where the bytes go.
pub fn run_report(kind: ReportKind, issues: &[Issue], opts: &ReportOptions) -> Result<serde_json::Value> {
  let value = match kind {
    ReportKind::Stats => serde_json::to_value(issue_stats(issues))?,
    ReportKind::Weeks => {
      let end = end_of_week(effective_now(opts.now), &opts.tz);
      serde_json::to_value(group_by_week(issues, end))?
    }
    ReportKind::Months => serde_json::to_value(group_by_month(issues))?,
    ReportKind::Labels => serde_json::to_value(label_index(issues, &opts.excluded_labels))?,
    ReportKind::Product => {
      let (subplat, rest) = split_by_product(issues, &opts.product_component);
      let subplat: Vec<Issue> = subplat.into_iter().cloned().collect();
      let rest: Vec<Issue> = rest.into_iter().cloned().collect();

      serde_json::to_value(ProductReport {
        subplat: ProductGroup {
          count: subplat.len(),
          stats: issue_stats(&subplat),
        },
        rest: ProductGroup {
          count: rest.len(),
          stats: issue_stats(&rest),
        },
      })?
    }
  };

  Ok(value)
}
