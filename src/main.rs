use anyhow::{Context, Result};
use clap::Parser;

use issue_activity_report::cli::{normalize, Cli, EffectiveConfig, Source};
use issue_activity_report::model::Issue;
use issue_activity_report::render::{run_report, ReportOptions};
use issue_activity_report::{jira, normalize as records, util};

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "warn")).init();

  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  // Phase 2: load and normalize records
  let raws = load_raw_issues(&cfg)?;
  let issues = normalize_records(&cfg, &raws)?;

  // Phase 3: build the report and write it
  let opts = ReportOptions {
    tz: cfg.tz.clone(),
    now: util::parse_now(cfg.now_override.as_deref()),
    excluded_labels: cfg.excluded_labels.clone(),
    product_component: cfg.product_component.clone(),
  };
  let report = run_report(cfg.report, &issues, &opts)?;

  util::write_output(&cfg.out, &util::jsonify(&report)?)
}

fn load_raw_issues(cfg: &EffectiveConfig) -> Result<Vec<serde_json::Value>> {
  match &cfg.source {
    Source::File(path) => {
      let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

      serde_json::from_str(&text).with_context(|| format!("parsing issue array from {}", path.display()))
    }
    Source::Jira {
      config,
      project,
      max_results,
    } => {
      let api = jira::HttpJira::new(config.clone());
      let issues = jira::fetch_all_issues(&api, project, &jira::default_fields(), *max_results)?;

      Ok(issues)
    }
  }
}

fn normalize_records(cfg: &EffectiveConfig, raws: &[serde_json::Value]) -> Result<Vec<Issue>> {
  let issues = if cfg.skip_invalid {
    let (issues, skipped) = records::normalize_lenient(raws);

    for err in &skipped {
      log::warn!("skipping record: {err}");
    }
    if !skipped.is_empty() {
      log::warn!("skipped {} of {} records", skipped.len(), raws.len());
    }

    issues
  } else {
    records::normalize_all(raws)?
  };

  if cfg.sanitize {
    return Ok(issues.iter().map(records::sanitize).collect());
  }

  Ok(issues)
}
