// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Jira REST search client: auth header assembly, paginated fetch, typed request/response bodies
// role: fetch/jira-api
// inputs: JiraConfig (server, email, token), project key, field list, optional result cap
// outputs: Raw issue JSON values for the normalizer; FetchError with Jira's status and message on failure
// side_effects: Network calls to the configured Jira server
// invariants:
// - Page size never exceeds 100 (Jira search cap); the result cap truncates exactly
// - Pagination stops on total reached, cap reached, or an empty page
// - No retries; errors surface unchanged to the caller
// errors: Non-2xx responses and malformed bodies become Error::Fetch; connection failures become Error::Transport
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use base64::prelude::BASE64_STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::ext::serde_json::JsonExt;
use crate::normalize::SEVERITY_FIELD;

/// Jira caps search pages at 100 issues.
const PAGE_SIZE: usize = 100;

/// The columns the reports need, matching the normalizer's expectations.
pub const DEFAULT_FIELDS: &[&str] = &[
  "assignee",
  "components",
  "created",
  SEVERITY_FIELD,
  "issuetype",
  "labels",
  "link",
  "priority",
  "reporter",
  "status",
  "summary",
  "updated",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraConfig {
  pub server: String,
  pub email: String,
  pub token: String,
}

impl JiraConfig {
  /// Basic auth header from the token-owner email and the API token.
  pub fn auth_header(&self) -> String {
    let raw = format!("{}:{}", self.email, self.token);
    format!("Basic {}", BASE64_STANDARD.encode(raw))
  }

  pub fn search_url(&self) -> String {
    format!("{}/rest/api/3/search", self.server.trim_end_matches('/'))
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
  pub expand: Vec<String>,
  pub fields: Vec<String>,
  pub fields_by_keys: bool,
  pub jql: String,
  pub max_results: usize,
  pub start_at: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
  #[serde(default)]
  pub issues: Vec<serde_json::Value>,
  #[serde(default)]
  pub total: usize,
}

/// Unresolved bugs and tasks, newest first.
pub fn search_jql(project: &str) -> String {
  format!("project = {project} AND issuetype IN (Bug, Task) AND resolution = Unresolved ORDER BY created DESC")
}

// --- Trait seam for the Jira API ---
pub trait JiraApi {
  fn search(&self, req: &SearchRequest) -> Result<SearchResponse, Error>;
}

/// ureq-backed client for a real Jira server.
pub struct HttpJira {
  config: JiraConfig,
  agent: ureq::Agent,
}

impl HttpJira {
  pub fn new(config: JiraConfig) -> Self {
    Self {
      config,
      agent: ureq::AgentBuilder::new().build(),
    }
  }
}

impl JiraApi for HttpJira {
  fn search(&self, req: &SearchRequest) -> Result<SearchResponse, Error> {
    let resp = self
      .agent
      .post(&self.config.search_url())
      .set("Authorization", &self.config.auth_header())
      .set("Accept", "application/json")
      .send_json(req);

    match resp {
      Ok(r) => {
        let status = r.status();

        r.into_json::<SearchResponse>().map_err(|e| Error::Fetch {
          status,
          message: format!("malformed search response: {e}"),
        })
      }
      Err(ureq::Error::Status(status, r)) => {
        let message = r
          .into_json::<serde_json::Value>()
          .ok()
          .and_then(|v| v.strings_at("errorMessages").and_then(|m| m.into_iter().next()))
          .unwrap_or_else(|| "jira returned an error".to_string());

        Err(Error::Fetch { status, message })
      }
      Err(ureq::Error::Transport(t)) => Err(Error::Transport(t.to_string())),
    }
  }
}

/// Fetch every issue matching the project search, paginating until the
/// server-reported total (or the caller's cap) is reached.
pub fn fetch_all_issues(
  api: &dyn JiraApi,
  project: &str,
  fields: &[String],
  max_results: Option<usize>,
) -> Result<Vec<serde_json::Value>, Error> {
  let mut req = SearchRequest {
    expand: vec!["schema".into()],
    fields: fields.to_vec(),
    fields_by_keys: false,
    jql: search_jql(project),
    max_results: max_results.map_or(PAGE_SIZE, |m| m.min(PAGE_SIZE)),
    start_at: 0,
  };

  let mut issues: Vec<serde_json::Value> = Vec::new();

  loop {
    let page = api.search(&req)?;
    let fetched = page.issues.len();

    issues.extend(page.issues);
    log::debug!("fetched {}/{} issues for project {}", issues.len(), page.total, project);

    if let Some(cap) = max_results {
      if issues.len() >= cap {
        issues.truncate(cap);
        break;
      }
    }

    // An empty page before total is a server inconsistency; stop rather than spin.
    if fetched == 0 || issues.len() >= page.total {
      break;
    }

    req.start_at = issues.len();
  }

  Ok(issues)
}

/// Default field list as owned strings, for callers building a fetch.
pub fn default_fields() -> Vec<String> {
  DEFAULT_FIELDS.iter().map(|s| s.to_string()).collect()
}
