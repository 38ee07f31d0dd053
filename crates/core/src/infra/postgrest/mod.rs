//! Reqwest-backed client for the
//! hosted roll table. Maps transport
//! and API failures into messages
//! fit for the status line.

pub mod filter;

use std::time::{
  Duration,
  Instant
};

use reqwest::blocking::{
  Client,
  Request
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{
  debug,
  warn
};

use self::filter::or_ilike_filter;
use crate::domain::model::VoterRecord;

/// Table the lookup reads. The
/// hosted service owns its schema.
pub const VOTERS_TABLE: &str =
  "voters";

/// Where the roll lives and how to
/// authenticate against it. Cheap to
/// clone into worker threads.
#[derive(Debug, Clone)]
pub struct RollTarget {
  pub url:        String,
  pub key:        String,
  pub timeout_ms: u64
}

#[derive(Debug, Error)]
pub enum RollError {
  #[error("{0}")]
  Request(#[from] reqwest::Error),
  #[error("{message}")]
  Api {
    status:  u16,
    message: String
  },
  #[error("unusable roll url: {0}")]
  BadUrl(String)
}

pub struct RollClient {
  http:     Client,
  base_url: String,
  key:      String
}

impl RollClient {
  pub fn new(
    target: &RollTarget
  ) -> Result<Self, RollError> {
    let http = Client::builder()
      .timeout(Duration::from_millis(
        target.timeout_ms,
      ))
      .build()?;
    Ok(Self {
      http,
      base_url: target
        .url
        .trim_end_matches('/')
        .to_string(),
      key: target.key.clone()
    })
  }

  /// Partial-match lookup over name
  /// and EPIC id. One call per
  /// submitted search; the whole
  /// result set comes back in one
  /// page.
  pub fn search_voters(
    &self,
    term: &str
  ) -> Result<Vec<VoterRecord>, RollError>
  {
    let request =
      self.search_request(term)?;
    let url = request.url().to_string();
    let start = Instant::now();
    debug!(url = %url, "roll search start");
    let response =
      self.http.execute(request)?;
    let status = response.status();
    let latency_ms = start
      .elapsed()
      .as_millis()
      as u64;
    if !status.is_success() {
      let body = response
        .text()
        .unwrap_or_default();
      warn!(
        url = %url,
        status = status.as_u16(),
        latency_ms,
        "roll search failed"
      );
      return Err(RollError::Api {
        status:  status.as_u16(),
        message: error_message(
          status.as_u16(),
          &body,
        )
      });
    }
    let voters = response
      .json::<Vec<VoterRecord>>()?;
    debug!(
      url = %url,
      rows = voters.len(),
      latency_ms,
      "roll search done"
    );
    Ok(voters)
  }

  /// The GET against
  /// `/rest/v1/voters`, selecting
  /// every column and filtering with
  /// an OR of `ilike` conditions.
  pub fn search_request(
    &self,
    term: &str
  ) -> Result<Request, RollError> {
    let endpoint = format!(
      "{}/rest/v1/{}",
      self.base_url, VOTERS_TABLE
    );
    let mut url =
      reqwest::Url::parse(&endpoint)
        .map_err(|e| {
          RollError::BadUrl(
            e.to_string(),
          )
        })?;
    url
      .query_pairs_mut()
      .append_pair("select", "*")
      .append_pair(
        "or",
        &or_ilike_filter(term),
      );
    let request = self
      .http
      .get(url)
      .header(
        "apikey",
        self.key.as_str(),
      )
      .bearer_auth(&self.key)
      .build()?;
    Ok(request)
  }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
  message: String
}

/// PostgREST error bodies carry a
/// `message` field; anything else is
/// surfaced as raw text.
pub fn error_message(
  status: u16,
  body: &str
) -> String {
  if let Ok(parsed) =
    serde_json::from_str::<ApiErrorBody>(
      body,
    )
  {
    return parsed.message;
  }
  let trimmed = body.trim();
  if trimmed.is_empty() {
    return format!(
      "request failed (status {status})"
    );
  }
  trimmed.to_string()
}
