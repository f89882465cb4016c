use crate::group::count_by;
use crate::model::{DimValue, Issue, StatsSummary};

/// Summarize a collection across the six reporting dimensions.
///
/// The boolean dimensions are derived from labels/components on the fly;
/// records are never written to. An empty collection still produces all six
/// dimensions, each as an empty map.
pub fn issue_stats(issues: &[Issue]) -> StatsSummary {
  StatsSummary {
    by_priority: count_by(issues, |i| DimValue::from(i.priority.as_str())),
    by_severity: count_by(issues, |i| DimValue::from(i.severity.as_deref())),
    by_issue_type: count_by(issues, |i| DimValue::from(i.issuetype.as_str())),
    by_status: count_by(issues, |i| DimValue::from(i.status.as_str())),
    by_maintenance: count_by(issues, |i| DimValue::from(i.is_maintenance())),
    by_subplat: count_by(issues, |i| DimValue::from(i.is_sub_plat())),
  }
}
