use crate::config::{Config, Query};
use crate::results::{self, Output};
use crate::steps::{self, Fetched};
use anyhow::Result;
use log::info;
use reqwest::Client;

/// Printed when no query flag is given.
pub const USAGE_HINT: &str = "No arguments provided. Use -h or --help for help.";

/// Outcome of one invocation, mapped to the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Printed,
  NoResult,
  NoQuery,
}

pub struct App {
  config: Config,
  client: Client,
}

impl App {
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be built.
  pub fn new(config: Config) -> Result<Self> {
    let client = Client::builder()
      .user_agent(config.user_agent.clone())
      .build()?;
    Ok(Self { config, client })
  }

  /// Runs the configured query and prints its result.
  ///
  /// # Errors
  ///
  /// Returns an error for malformed response bodies, a missing `org` root,
  /// or a serialization failure.
  pub async fn run(&self) -> Result<Outcome> {
    let Some(query) = &self.config.query else {
      println!("{USAGE_HINT}");
      return Ok(Outcome::NoQuery);
    };

    match self.lookup(query).await? {
      Some(output) => {
        self.print_results(&output)?;
        Ok(Outcome::Printed)
      }
      None => Ok(Outcome::NoResult),
    }
  }

  /// Fetches and reshapes one query. `Ok(None)` means the API gave no result.
  ///
  /// # Errors
  ///
  /// See [`App::run`].
  pub async fn lookup(&self, query: &Query) -> Result<Option<Output>> {
    info!(
      "querying {} {} at {}",
      query.entity_type(),
      query.value(),
      self.config.base_url
    );
    match steps::fetch_step(query, &self.config.base_url, &self.client).await? {
      Fetched::Envelope(envelope) => {
        steps::normalize_step(query.mode(), envelope).map(Some)
      }
      Fetched::NoResult(message) => {
        eprintln!("{message}");
        Ok(None)
      }
    }
  }

  fn print_results(&self, output: &Output) -> Result<()> {
    if self.config.human {
      results::print_human_readable(output)
    } else {
      results::print_json(output)
    }
  }
}
