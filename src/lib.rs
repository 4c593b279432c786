#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use anyhow::Result;
use clap::Parser;

pub mod app;
pub mod cli;
pub mod config;
pub mod extract;
pub mod logging;
pub mod providers;
pub mod records;
pub mod results;
pub mod steps;

pub use app::Outcome;
pub use cli::{Cli, EntityArg};

/// Runs the command-line application.
///
/// Parses arguments, initializes logging, issues the single Whois query and
/// prints the result.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the response body is
/// not valid JSON, an organization response has no `org` root, or printing
/// the result fails.
pub async fn run() -> Result<Outcome> {
  let config = config::Config::from_cli(Cli::parse());
  logging::init_logger(config.log_level);

  let app = app::App::new(config)?;
  app.run().await
}
