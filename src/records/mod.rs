//! Flat records built from raw ARIN Whois envelopes.
//!
//! The network path defaults every missing field to `""`. The organization
//! path defaults missing fields to `null` and requires the `org` root.

pub mod net;
pub mod org;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("response envelope has no `{0}` key")]
  MissingKey(&'static str),
  #[error("response envelope `{0}` is not an object")]
  UnexpectedShape(&'static str),
}
