use crate::error::Error;
use crate::ext::serde_json::JsonExt;
use crate::model::Issue;
use crate::util::parse_timestamp;

/// Jira custom field carrying severity; remapped onto `Issue::severity`.
pub const SEVERITY_FIELD: &str = "customfield_10319";

fn required<'a>(raw: &'a serde_json::Value, key: &str, path: &str) -> Result<&'a str, Error> {
  raw
    .str_at(path)
    .ok_or_else(|| Error::parse(key, format!("missing {path}")))
}

fn timestamp(raw: &serde_json::Value, key: &str, path: &str) -> Result<chrono::DateTime<chrono::Utc>, Error> {
  let s = required(raw, key, path)?;

  parse_timestamp(s).ok_or_else(|| Error::parse(key, format!("invalid timestamp in {path}: {s}")))
}

/// Convert one raw Jira search hit into a canonical [`Issue`].
///
/// `issuetype`, `priority`, and `status` come from `.name` of their nested
/// objects and are required, as are parseable `created`/`updated` timestamps.
/// Severity reads the custom field's `.value`; assignee/reporter read
/// `.displayName`. All three are optional and absent values are not errors.
pub fn normalize_issue(raw: &serde_json::Value) -> Result<Issue, Error> {
  let key = raw
    .str_at("key")
    .ok_or_else(|| Error::parse("<unknown>", "missing key"))?
    .to_string();

  if raw.at("fields").is_none() {
    return Err(Error::parse(key, "missing fields"));
  }

  let severity_path = format!("fields.{SEVERITY_FIELD}.value");

  Ok(Issue {
    issuetype: required(raw, &key, "fields.issuetype.name")?.to_string(),
    priority: required(raw, &key, "fields.priority.name")?.to_string(),
    status: required(raw, &key, "fields.status.name")?.to_string(),
    severity: raw.str_at(&severity_path).map(|s| s.to_string()),
    components: raw.names_at("fields.components").unwrap_or_default(),
    labels: raw.strings_at("fields.labels").unwrap_or_default(),
    assignee: raw.str_at("fields.assignee.displayName").map(|s| s.to_string()),
    reporter: raw.str_at("fields.reporter.displayName").map(|s| s.to_string()),
    summary: raw.str_at("fields.summary").map(|s| s.to_string()),
    created: timestamp(raw, &key, "fields.created")?,
    updated: timestamp(raw, &key, "fields.updated")?,
    key,
  })
}

/// Normalize a batch, failing on the first malformed record.
pub fn normalize_all(raws: &[serde_json::Value]) -> Result<Vec<Issue>, Error> {
  raws.iter().map(normalize_issue).collect()
}

/// Normalize a batch, skipping malformed records and reporting them.
///
/// The skip-and-report policy is opt-in; callers are expected to surface the
/// returned errors (the CLI logs one warning per skip).
pub fn normalize_lenient(raws: &[serde_json::Value]) -> (Vec<Issue>, Vec<Error>) {
  let mut issues = Vec::with_capacity(raws.len());
  let mut skipped = Vec::new();

  for raw in raws {
    match normalize_issue(raw) {
      Ok(issue) => issues.push(issue),
      Err(e) => skipped.push(e),
    }
  }

  (issues, skipped)
}

/// Return a copy of the record with potential PII removed: assignee,
/// reporter, and the free-text summary. Pure; the input record is untouched,
/// so a record shared between buckets can never observe the stripping.
pub fn sanitize(issue: &Issue) -> Issue {
  Issue {
    assignee: None,
    reporter: None,
    summary: None,
    ..issue.clone()
  }
}
