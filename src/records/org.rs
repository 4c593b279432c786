//! Organization (`/org`) records.

use super::Error;
use crate::extract::extract_opt;
use serde::Serialize;
use serde_json::Value;

/// Flattened organization record.
///
/// Missing fields stay `None` and render as `null`, unlike the network
/// record which renders them as `""`.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRecord {
  pub name: Option<String>,
  pub handle: Option<String>,
  pub registration_date: Option<String>,
  pub update_date: Option<String>,
  pub can_allocate: Option<String>,
  pub city: Option<String>,
  pub postal_code: Option<String>,
  /// Country name.
  #[serde(rename = "iso3166-1")]
  pub iso3166_1: Option<String>,
  /// Subdivision code.
  #[serde(rename = "iso3166-2")]
  pub iso3166_2: Option<String>,
}

/// Normalizes an `/org` envelope.
///
/// # Errors
///
/// Returns [`Error::MissingKey`] when the envelope has no `org` key and
/// [`Error::UnexpectedShape`] when `org` is not an object. Individually
/// missing fields are never an error.
pub fn normalize(envelope: &Value) -> Result<OrganizationRecord, Error> {
  let org = envelope.get("org").ok_or(Error::MissingKey("org"))?;
  if !org.is_object() {
    return Err(Error::UnexpectedShape("org"));
  }

  Ok(OrganizationRecord {
    name: extract_opt(org, &["name"]),
    handle: extract_opt(org, &["handle"]),
    registration_date: extract_opt(org, &["registrationDate"]),
    update_date: extract_opt(org, &["updateDate"]),
    can_allocate: extract_opt(org, &["canAllocate"]),
    city: extract_opt(org, &["city"]),
    postal_code: extract_opt(org, &["postalCode"]),
    iso3166_1: extract_opt(org, &["iso3166-1", "name"]),
    iso3166_2: extract_opt(org, &["iso3166-2"]),
  })
}
