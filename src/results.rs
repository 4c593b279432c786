use crate::records::{net::NetworkRecord, org::OrganizationRecord};
use anyhow::{Context, Result};
use console::{style, Style};
use serde::Serialize;
use serde_json::Value;

/// What a lookup produced, ready for printing.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
  Network(NetworkRecord),
  Org(OrganizationRecord),
  Raw(Value),
}

/// Helper: coloured keys so the summary is easy to scan.
fn key(s: &str) -> console::StyledObject<&str> {
  style(s).bold().cyan()
}

fn header(title: &str) {
  println!("{}", Style::new().bold().underlined().apply_to(title));
}

fn or_na(value: &str) -> &str {
  if value.is_empty() {
    "N/A"
  } else {
    value
  }
}

fn print_network(r: &NetworkRecord) {
  header(&format!("Network {}", or_na(&r.handle)));
  println!("  {} {}", key("Name:"), or_na(&r.name));
  println!(
    "  {} {} - {}",
    key("Range:"),
    or_na(&r.start_address),
    or_na(&r.end_address)
  );
  println!("  {} {}", key("Version:"), or_na(&r.version));
  println!("  {} {}", key("Registered:"), or_na(&r.registration_date));
  println!("  {} {}", key("Updated:"), or_na(&r.update_date));
  println!(
    "  {} {} ({})",
    key("Organization:"),
    or_na(&r.org_ref.name),
    or_na(&r.org_ref.handle)
  );
  println!(
    "  {} {} ({})",
    key("Parent:"),
    or_na(&r.parent_net_ref.name),
    or_na(&r.parent_net_ref.handle)
  );

  if r.net_blocks.net_block.is_empty() {
    println!("  {} {}", key("Blocks:"), style("none").dim());
  }
  for b in &r.net_blocks.net_block {
    println!(
      "  {} {}/{} {} {}",
      key("Block:"),
      or_na(&b.start_address),
      or_na(&b.cidr_length),
      style(&b.kind).yellow(),
      style(&b.description).dim()
    );
  }
}

fn print_org(r: &OrganizationRecord) {
  let na = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".into());
  header(&format!("Organization {}", na(&r.handle)));
  println!("  {} {}", key("Name:"), na(&r.name));
  println!("  {} {}", key("City:"), na(&r.city));
  println!("  {} {}", key("Postal Code:"), na(&r.postal_code));
  println!("  {} {}", key("Region:"), na(&r.iso3166_2));
  println!("  {} {}", key("Country:"), na(&r.iso3166_1));
  println!("  {} {}", key("Can Allocate:"), na(&r.can_allocate));
  println!("  {} {}", key("Registered:"), na(&r.registration_date));
  println!("  {} {}", key("Updated:"), na(&r.update_date));
}

/// Prints normalized records as a coloured summary. Raw responses fall back
/// to JSON.
///
/// # Errors
///
/// Returns an error if a raw response cannot be serialized.
pub fn print_human_readable(output: &Output) -> Result<()> {
  match output {
    Output::Network(r) => print_network(r),
    Output::Org(r) => print_org(r),
    Output::Raw(_) => return print_json(output),
  }
  Ok(())
}

/// Renders `output` as JSON with a 2-space indent.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(output: &Output) -> Result<String> {
  serde_json::to_string_pretty(output).context("Failed to serialize results to JSON")
}

/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json(output: &Output) -> Result<()> {
  to_json(output).map(|s| println!("{s}"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::records::{net, org};
  use serde_json::json;

  #[test]
  fn test_to_json_network_two_space_indent() {
    let record = net::normalize(&json!({"net": {"handle": {"$": "NET-1"}}}));
    let text = to_json(&Output::Network(record)).unwrap();
    assert!(text.starts_with("{\n  \"registrationDate\": \"\""));
    assert!(text.contains("\n  \"handle\": \"NET-1\""));
    assert!(text.contains("\"netBlock\": []"));
  }

  #[test]
  fn test_to_json_org_nulls() {
    let record = org::normalize(&json!({"org": {"name": {"$": "Example Org"}}})).unwrap();
    let text = to_json(&Output::Org(record)).unwrap();
    assert!(text.contains("\"name\": \"Example Org\""));
    assert!(text.contains("\"city\": null"));
  }

  #[test]
  fn test_to_json_raw_is_unchanged() {
    let envelope = json!({"customer": {"handle": {"$": "C01"}, "@xmlns": {"$": "x"}}});
    let text = to_json(&Output::Raw(envelope.clone())).unwrap();
    let back: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back, envelope);
  }

  #[test]
  fn test_or_na() {
    assert_eq!(or_na(""), "N/A");
    assert_eq!(or_na("x"), "x");
  }
}
