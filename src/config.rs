use crate::cli::Cli;
use log::LevelFilter;

/// How a query's response is reshaped before printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Network,
  Org,
  Raw,
}

/// A single Whois lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
  Org(String),
  Ip(String),
  Net(String),
  Customer(String),
  Entity { kind: String, value: String },
}

impl Query {
  /// ARIN REST path segment for this lookup.
  #[must_use]
  pub fn entity_type(&self) -> &str {
    match self {
      Self::Org(_) => "org",
      Self::Ip(_) => "ip",
      Self::Net(_) => "net",
      Self::Customer(_) => "customer",
      Self::Entity { kind, .. } => kind,
    }
  }

  #[must_use]
  pub fn value(&self) -> &str {
    match self {
      Self::Org(v)
      | Self::Ip(v)
      | Self::Net(v)
      | Self::Customer(v)
      | Self::Entity { value: v, .. } => v,
    }
  }

  #[must_use]
  pub const fn mode(&self) -> Mode {
    match self {
      Self::Org(_) => Mode::Org,
      Self::Ip(_) | Self::Net(_) => Mode::Network,
      Self::Customer(_) | Self::Entity { .. } => Mode::Raw,
    }
  }
}

#[derive(Debug, Clone)]
pub struct Config {
  pub query: Option<Query>,
  pub base_url: String,
  pub user_agent: String,
  pub human: bool,
  pub log_level: LevelFilter,
}

impl Config {
  #[must_use]
  pub fn from_cli(cli: Cli) -> Self {
    let query = if let Some(org) = cli.org {
      Some(Query::Org(org))
    } else if let Some(ip) = cli.ip {
      Some(Query::Ip(ip))
    } else if let Some(net) = cli.net {
      Some(Query::Net(net))
    } else if let Some(customer) = cli.customer {
      Some(Query::Customer(customer))
    } else {
      cli.entity.map(|e| Query::Entity {
        kind: e.kind,
        value: e.value,
      })
    };

    let log_level = match cli.verbose {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Info,
      2 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    };

    Self {
      query,
      base_url: cli.base_url,
      user_agent: format!("arinq/{}", env!("CARGO_PKG_VERSION")),
      human: cli.human,
      log_level,
    }
  }
}
