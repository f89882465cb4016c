use std::collections::BTreeMap;

// The one group-by-and-count primitive every report dimension shares.
// BTreeMap keys give deterministic iteration; consumers re-sort if they
// need anything else.

/// Group items by an extracted key. Keys returned for every item are kept,
/// including whatever the extractor uses to model "absent".
pub fn group_by<'a, T, K, F>(items: &'a [T], key: F) -> BTreeMap<K, Vec<&'a T>>
where
  K: Ord,
  F: Fn(&T) -> K,
{
  let mut groups: BTreeMap<K, Vec<&T>> = BTreeMap::new();

  for item in items {
    groups.entry(key(item)).or_default().push(item);
  }

  groups
}

/// Count items per distinct extracted key.
pub fn count_by<T, K, F>(items: &[T], key: F) -> BTreeMap<K, usize>
where
  K: Ord,
  F: Fn(&T) -> K,
{
  let mut counts: BTreeMap<K, usize> = BTreeMap::new();

  for item in items {
    *counts.entry(key(item)).or_insert(0) += 1;
  }

  counts
}
