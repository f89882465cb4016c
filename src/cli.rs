use anyhow::{bail, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::jira::JiraConfig;
use crate::labels::default_exclusions;
use crate::model::SUBSCRIPTION_PLATFORM;
use crate::render::ReportKind;

#[derive(Parser, Debug)]
#[command(
    name = "issue-activity-report",
    version,
    about = "Export Jira issue activity to JSON (stats, weekly, monthly, labels, product)",
    long_about = None
)]
pub struct Cli {
  /// Which report to emit
  #[arg(long, value_enum, default_value_t = ReportKind::Stats)]
  pub report: ReportKind,

  /// Read raw issues from a JSON file instead of fetching from Jira
  #[arg(long)]
  pub input: Option<PathBuf>,

  /// Jira project key used in the search
  #[arg(long, default_value = "FXA")]
  pub project: String,

  /// Jira server base URL (fallback: JIRA_SERVER)
  #[arg(long)]
  pub server: Option<String>,

  /// Email address that owns the API token (fallback: JIRA_EMAIL)
  #[arg(long)]
  pub email: Option<String>,

  /// Jira API token (fallback: JIRA_TOKEN)
  #[arg(long)]
  pub token: Option<String>,

  /// Cap on fetched issues (default: all pages)
  #[arg(long)]
  pub max_results: Option<usize>,

  /// Strip assignee/reporter/summary from records before reporting
  #[arg(long)]
  pub sanitize: bool,

  /// Skip records that fail normalization instead of failing the run
  #[arg(long)]
  pub skip_invalid: bool,

  /// Timezone for end-of-week weekday detection: "utc", "local", or an IANA name
  #[arg(long, default_value = "utc")]
  pub tz: String,

  /// Label excluded from the labels report (repeatable; default: QA triage labels)
  #[arg(long = "exclude-label")]
  pub exclude_labels: Vec<String>,

  /// Component that defines the product split
  #[arg(long, default_value = SUBSCRIPTION_PLATFORM)]
  pub product_component: String,

  /// Output location: file path, or "-" for stdout
  #[arg(long, default_value = "-")]
  pub out: String,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant for week bucketing (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

/// Where raw records come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Source {
  File(PathBuf),
  Jira {
    config: JiraConfig,
    project: String,
    max_results: Option<usize>,
  },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EffectiveConfig {
  pub report: ReportKind,
  pub source: Source,
  pub sanitize: bool,
  pub skip_invalid: bool,
  pub tz: String,
  pub excluded_labels: Vec<String>,
  pub product_component: String,
  pub out: String,
  pub now_override: Option<String>,
}

fn flag_or_env(flag: Option<String>, var: &str) -> Option<String> {
  flag.or_else(|| std::env::var(var).ok().filter(|s| !s.trim().is_empty()))
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  // Validate source selection
  let source = match (&cli.input, &cli.server) {
    (Some(path), Some(_)) => {
      bail!("Ambiguous source: choose --input {} or a Jira server, not both", path.display())
    }
    (Some(path), None) => Source::File(path.clone()),
    (None, _) => {
      let server = flag_or_env(cli.server.clone(), "JIRA_SERVER");
      let email = flag_or_env(cli.email.clone(), "JIRA_EMAIL");
      let token = flag_or_env(cli.token.clone(), "JIRA_TOKEN");

      match (server, email, token) {
        (Some(server), Some(email), Some(token)) => Source::Jira {
          config: JiraConfig { server, email, token },
          project: cli.project.clone(),
          max_results: cli.max_results,
        },
        _ => bail!(
          "Provide --input FILE, or Jira credentials via --server/--email/--token (or JIRA_SERVER/JIRA_EMAIL/JIRA_TOKEN)"
        ),
      }
    }
  };

  let excluded_labels = if cli.exclude_labels.is_empty() {
    default_exclusions()
  } else {
    cli.exclude_labels.clone()
  };

  Ok(EffectiveConfig {
    report: cli.report,
    source,
    sanitize: cli.sanitize,
    skip_invalid: cli.skip_invalid,
    tz: cli.tz,
    excluded_labels,
    product_component: cli.product_component,
    out: cli.out,
    now_override: cli.now_override,
  })
}
