#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use anyhow::Result;
use arinq::{run, Outcome};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
  // Install the default crypto provider for rustls
  let _ = rustls::crypto::ring::default_provider().install_default();

  Ok(match run().await? {
    Outcome::Printed => ExitCode::SUCCESS,
    Outcome::NoResult | Outcome::NoQuery => ExitCode::FAILURE,
  })
}
