//! Logger initialization.

use log::LevelFilter;

/// Builds the filter set: `RUST_LOG` directives first, then `level` as the
/// default and for this crate, with HTTP/TLS internals capped at `info`.
fn builder(level: LevelFilter, rust_log: Option<&str>) -> env_logger::Builder {
  let mut builder = env_logger::Builder::new();
  if let Some(filters) = rust_log {
    builder.parse_filters(filters);
  }
  builder.filter_level(level);
  builder.filter_module("reqwest", LevelFilter::Info.min(level));
  builder.filter_module("hyper", LevelFilter::Info.min(level));
  builder.filter_module("hyper_util", LevelFilter::Info.min(level));
  builder.filter_module("rustls", LevelFilter::Info.min(level));
  // Replaces any `arinq=...` directive coming from RUST_LOG.
  builder.filter_module("arinq", level);
  builder
}

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` is read first; `level` (from `-v`) then overrides the default
/// and the crate's own level.
pub fn init_logger(level: LevelFilter) {
  let rust_log = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
  let mut builder = builder(level, rust_log.as_deref());
  builder.format_timestamp(None);
  builder.target(env_logger::Target::Stderr);

  // A second init (e.g. from tests) is harmless.
  let _ = builder.try_init();
}
