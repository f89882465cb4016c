use thiserror::Error;

/// Failures the core can produce. Parse errors carry the offending issue key
/// so a skipped record is attributable; fetch errors surface the Jira HTTP
/// status and message unchanged. The core never retries.
#[derive(Debug, Error)]
pub enum Error {
  #[error("parsing issue {key}: {reason}")]
  Parse { key: String, reason: String },

  #[error("jira search failed: HTTP {status}: {message}")]
  Fetch { status: u16, message: String },

  #[error("jira request failed: {0}")]
  Transport(String),
}

impl Error {
  pub fn parse(key: impl Into<String>, reason: impl Into<String>) -> Self {
    Error::Parse {
      key: key.into(),
      reason: reason.into(),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
