// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Ergonomic nested-value access over serde_json::Value for the Jira field container shapes
// role: extension/serde_json
// outputs: JsonExt trait: dotted-path lookup, string leaves, name-object lists, string lists
// invariants: No panics; missing or mistyped paths yield None
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

/// Extension for reading the nested shapes Jira uses: string leaves
/// (`fields.priority.name`), lists of `{name}` objects (`fields.components`),
/// and plain string arrays (`fields.labels`).
pub trait JsonExt {
  /// Walk a dotted path like `fields.status.name`; `None` when any hop is missing.
  fn at(&self, path: &str) -> Option<&serde_json::Value>;

  /// Path must resolve to a JSON string.
  fn str_at(&self, path: &str) -> Option<&str>;

  /// Path must resolve to an array of objects; collects each element's `name`.
  fn names_at(&self, path: &str) -> Option<Vec<String>>;

  /// Path must resolve to an array of strings.
  fn strings_at(&self, path: &str) -> Option<Vec<String>>;
}

impl JsonExt for serde_json::Value {
  fn at(&self, path: &str) -> Option<&serde_json::Value> {
    if path.is_empty() {
      return Some(self);
    }

    let mut cur = self;

    for key in path.split('.') {
      cur = cur.get(key)?;
    }

    Some(cur)
  }

  fn str_at(&self, path: &str) -> Option<&str> {
    self.at(path).and_then(|v| v.as_str())
  }

  fn names_at(&self, path: &str) -> Option<Vec<String>> {
    let arr = self.at(path)?.as_array()?;

    Some(
      arr
        .iter()
        .filter_map(|v| v.str_at("name").map(|s| s.to_string()))
        .collect(),
    )
  }

  fn strings_at(&self, path: &str) -> Option<Vec<String>> {
    let arr = self.at(path)?.as_array()?;

    Some(arr.iter().filter_map(|v| v.as_str().map(|s| s.to_string())).collect())
  }
}
