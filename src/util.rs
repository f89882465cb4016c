// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for timestamp parsing, deterministic "now" handling, output writing, and man page rendering
// role: utilities/helpers
// inputs: ISO-8601 strings; serde_json values; output targets; clap CommandFactory
// outputs: UTC timestamps, pretty JSON text, files or stdout, man page text
// side_effects: write_output writes files and creates parent directories
// invariants:
// - parse_timestamp accepts RFC3339, Jira numeric offsets, and naive UTC; anything else is None
// - effective_now is the only place a wall clock is read
// errors: IO errors bubble with path context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::CommandFactory;
use std::path::Path;

/// Pretty-print a JSON value with two-space indentation.
pub fn jsonify(value: &serde_json::Value) -> Result<String> {
  Ok(serde_json::to_string_pretty(value)?)
}

/// Parse an ISO-8601 timestamp into UTC.
///
/// Jira renders offsets without a colon (`2024-01-03T10:15:30.000-0800`),
/// which RFC3339 parsing rejects, so try the numeric-offset format next and
/// finally a naive timestamp interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Some(dt.with_timezone(&Utc));
  }

  if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
    return Some(dt.with_timezone(&Utc));
  }

  NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
    .ok()
    .map(|ndt| ndt.and_utc())
}

/// Parse a `--now-override` string into a UTC instant.
pub fn parse_now(s: Option<&str>) -> Option<DateTime<Utc>> {
  s.and_then(parse_timestamp)
}

/// Returns the effective "now" given an optional override.
///
/// When `override_now` is `Some`, that instant is returned; otherwise the
/// current time is used. Centralizes our handling of test determinism
/// without sprinkling `Utc::now()` throughout the code.
pub fn effective_now(override_now: Option<DateTime<Utc>>) -> DateTime<Utc> {
  override_now.unwrap_or_else(Utc::now)
}

/// Write report text to stdout (`-`) or a file, creating parent directories.
pub fn write_output(out: &str, text: &str) -> Result<()> {
  if out == "-" {
    println!("{}", text);
    return Ok(());
  }

  let path = Path::new(out);

  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
  }

  std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
