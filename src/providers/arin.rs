//! ARIN Whois REST client (whois.arin.net).

use log::{debug, warn};
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Public Whois-RWS endpoint.
pub const DEFAULT_BASE_URL: &str = "https://whois.arin.net/rest";

#[derive(Debug, Error)]
pub enum Error {
  #[error("{}", .0.as_u16())]
  Status(StatusCode),
  #[error("{0}")]
  Transport(#[from] reqwest::Error),
  #[error("failed to parse Whois response: {0}")]
  Decode(#[from] serde_json::Error),
}

impl Error {
  /// Status and transport failures both mean "no result"; only a body that
  /// fails to parse is a hard error.
  #[must_use]
  pub const fn is_no_result(&self) -> bool {
    matches!(self, Self::Status(_) | Self::Transport(_))
  }
}

/// Builds `{base_url}/{entity_type}/{value}.json`.
#[must_use]
pub fn query_url(base_url: &str, entity_type: &str, value: &str) -> String {
  format!("{}/{entity_type}/{value}.json", base_url.trim_end_matches('/'))
}

/// Fetches one Whois record as raw JSON.
///
/// # Arguments
/// * `entity_type` - ARIN entity path segment (`net`, `ip`, `org`, ...)
/// * `value` - handle, address or name to look up
/// * `base_url` - REST root, normally [`DEFAULT_BASE_URL`]
/// * `http_client` - HTTP client for the request
///
/// # Errors
/// - [`Error::Transport`] when the request cannot be sent or the body read
/// - [`Error::Status`] for any status other than `200 OK`
/// - [`Error::Decode`] when the body is not valid JSON
pub async fn fetch_record(
  entity_type: &str,
  value: &str,
  base_url: &str,
  http_client: &Client,
) -> Result<Value, Error> {
  let url = query_url(base_url, entity_type, value);
  debug!("GET {url}");

  let response = http_client
    .get(&url)
    .header(header::ACCEPT, "application/json")
    .send()
    .await
    .inspect_err(|e| warn!("request to {url} failed: {e}"))?;

  let status = response.status();
  if status != StatusCode::OK {
    warn!("{url} answered with status {status}");
    return Err(Error::Status(status));
  }

  let body = response.text().await?;
  Ok(serde_json::from_str(&body)?)
}
