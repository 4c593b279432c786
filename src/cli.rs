use clap::{ArgAction, ArgGroup, Parser};

/// `TYPE:VALUE` argument of `--entity`, split on the first colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityArg {
  pub kind: String,
  pub value: String,
}

fn parse_entity(raw: &str) -> Result<EntityArg, String> {
  match raw.split_once(':') {
    Some((kind, value)) if !kind.is_empty() && !value.is_empty() => {
      Ok(EntityArg {
        kind: kind.to_string(),
        value: value.to_string(),
      })
    }
    _ => Err(format!("expected TYPE:VALUE, got `{raw}`")),
  }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "arinq", version)]
#[command(
  about = "Query the ARIN Whois API.",
  long_about = "Query the ARIN Whois REST API for networks, IP addresses, organizations, customers or any other entity type, and print a flattened view of the record."
)]
#[command(group(ArgGroup::new("query").multiple(false)))]
pub struct Cli {
  /// Search organization.
  #[arg(short, long, value_name = "ORG", group = "query")]
  pub org: Option<String>,

  /// Search IP address.
  #[arg(short, long, value_name = "IP", group = "query")]
  pub ip: Option<String>,

  /// Search network.
  #[arg(short, long, value_name = "NET", group = "query")]
  pub net: Option<String>,

  /// Search customer.
  #[arg(short, long, value_name = "CUSTOMER", group = "query")]
  pub customer: Option<String>,

  /// Search other entity types, e.g. `poc:KOSTE-ARIN`.
  #[arg(short, long, value_name = "TYPE:VALUE", group = "query", value_parser = parse_entity)]
  pub entity: Option<EntityArg>,

  /// Print org/ip/net records as a human-readable summary instead of JSON.
  #[arg(long)]
  pub human: bool,

  /// Whois-RWS base URL.
  #[arg(long, value_name = "URL", hide = true, default_value = crate::providers::arin::DEFAULT_BASE_URL)]
  pub base_url: String,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace).
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_args(args: &[&str]) -> Vec<String> {
    std::iter::once("arinq".to_string())
      .chain(args.iter().map(std::string::ToString::to_string))
      .collect()
  }

  #[test]
  fn test_org_flag() {
    let cli = Cli::try_parse_from(make_args(&["--org", "GOGL"]))
      .expect("Should parse --org");
    assert_eq!(cli.org.as_deref(), Some("GOGL"));
    assert!(cli.ip.is_none());
    assert!(!cli.human);
    assert_eq!(cli.base_url, "https://whois.arin.net/rest");
  }

  #[test]
  fn test_short_flags() {
    let cli =
      Cli::try_parse_from(make_args(&["-i", "8.8.8.8"])).expect("Should parse -i");
    assert_eq!(cli.ip.as_deref(), Some("8.8.8.8"));

    let cli = Cli::try_parse_from(make_args(&["-n", "NET-8-8-8-0-2"]))
      .expect("Should parse -n");
    assert_eq!(cli.net.as_deref(), Some("NET-8-8-8-0-2"));

    let cli =
      Cli::try_parse_from(make_args(&["-c", "C0001"])).expect("Should parse -c");
    assert_eq!(cli.customer.as_deref(), Some("C0001"));
  }

  #[test]
  fn test_no_query_parses() {
    let cli = Cli::try_parse_from(make_args(&[])).expect("Should parse nothing");
    assert!(cli.org.is_none());
    assert!(cli.ip.is_none());
    assert!(cli.net.is_none());
    assert!(cli.customer.is_none());
    assert!(cli.entity.is_none());
  }

  #[test]
  fn test_query_flags_are_exclusive() {
    let result = Cli::try_parse_from(make_args(&["--org", "A", "--ip", "1.1.1.1"]));
    assert!(
      matches!(
        result.unwrap_err().kind(),
        clap::error::ErrorKind::ArgumentConflict
      ),
      "Two query flags should conflict"
    );
  }

  #[test]
  fn test_entity_splits_on_first_colon() {
    let cli = Cli::try_parse_from(make_args(&["-e", "poc:KOSTE-ARIN"]))
      .expect("Should parse entity");
    assert_eq!(
      cli.entity,
      Some(EntityArg {
        kind: "poc".into(),
        value: "KOSTE-ARIN".into()
      })
    );

    let cli = Cli::try_parse_from(make_args(&["--entity", "ip:2001:db8::1"]))
      .expect("Should parse entity with colons in value");
    let entity = cli.entity.expect("entity");
    assert_eq!(entity.kind, "ip");
    assert_eq!(entity.value, "2001:db8::1");
  }

  #[test]
  fn test_entity_without_colon_fails() {
    let result = Cli::try_parse_from(make_args(&["--entity", "KOSTE-ARIN"]));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("TYPE:VALUE"));
  }

  #[test]
  fn test_verbose_and_human() {
    let cli = Cli::try_parse_from(make_args(&["-vv", "--human", "-n", "NET-1"]))
      .expect("Should parse verbosity");
    assert_eq!(cli.verbose, 2);
    assert!(cli.human);
  }

  #[test]
  fn test_base_url_override() {
    let cli = Cli::try_parse_from(make_args(&[
      "--base-url",
      "http://localhost:9000/rest",
      "-o",
      "EX-1",
    ]))
    .expect("Should parse base url");
    assert_eq!(cli.base_url, "http://localhost:9000/rest");
  }
}
