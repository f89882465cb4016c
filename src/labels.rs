use crate::model::Issue;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// QA triage markers; noise in a label report.
pub const DEFAULT_EXCLUDED_LABELS: &[&str] = &["qa+", "qa-", "qa-minor", "qa-medium"];

/// Count how many records carry each label.
///
/// A record contributes to every label it carries, so this is a multi-label
/// tally rather than a partition. Labels in `exclusions` are removed from the
/// output entirely; iteration order is lexicographic.
pub fn label_index(issues: &[Issue], exclusions: &[String]) -> BTreeMap<String, usize> {
  let distinct: BTreeSet<&str> = issues
    .iter()
    .flat_map(|i| i.labels.iter().map(|l| l.as_str()))
    .filter(|l| !exclusions.iter().any(|x| x.as_str() == *l))
    .collect();

  distinct
    .into_iter()
    .map(|label| {
      let count = issues.iter().filter(|i| i.has_label(label)).count();
      (label.to_string(), count)
    })
    .collect()
}

/// Convenience for the default QA exclusion set.
pub fn default_exclusions() -> Vec<String> {
  DEFAULT_EXCLUDED_LABELS.iter().map(|s| s.to_string()).collect()
}

/// Split a collection into the records on `component` and everything else.
pub fn split_by_product<'a>(issues: &'a [Issue], component: &str) -> (Vec<&'a Issue>, Vec<&'a Issue>) {
  issues.iter().partition(|i| i.has_component(component))
}
