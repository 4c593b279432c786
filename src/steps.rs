use crate::{
  config::{Mode, Query},
  providers::arin,
  records::{net, org},
  results::Output,
};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

/// Result of the HTTP step.
#[derive(Debug)]
pub enum Fetched {
  Envelope(Value),
  /// Status or transport failure, carrying the `Error: <reason>` line shown
  /// to the user.
  NoResult(String),
}

/// Fetches the raw envelope for `query`.
///
/// Status and transport failures yield [`Fetched::NoResult`]. A body that
/// fails to parse is returned as an error.
///
/// # Errors
///
/// Returns an error if the response body is not valid JSON.
pub async fn fetch_step(
  query: &Query,
  base_url: &str,
  client: &Client,
) -> Result<Fetched> {
  match arin::fetch_record(query.entity_type(), query.value(), base_url, client)
    .await
  {
    Ok(envelope) => Ok(Fetched::Envelope(envelope)),
    Err(e) if e.is_no_result() => Ok(Fetched::NoResult(format!("Error: {e}"))),
    Err(e) => Err(e).with_context(|| {
      format!("Whois lookup for {} {} failed", query.entity_type(), query.value())
    }),
  }
}

/// Reshapes an envelope according to the query mode.
///
/// # Errors
///
/// Returns an error if an organization envelope has no usable `org` root.
pub fn normalize_step(mode: Mode, envelope: Value) -> Result<Output> {
  match mode {
    Mode::Network => Ok(Output::Network(net::normalize(&envelope))),
    Mode::Org => org::normalize(&envelope)
      .map(Output::Org)
      .context("Failed to normalize organization record"),
    Mode::Raw => Ok(Output::Raw(envelope)),
  }
}
