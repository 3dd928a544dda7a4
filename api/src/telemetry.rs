// catalog_api/src/telemetry.rs

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset, empty or entirely invalid.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Builds the log filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_LEVEL`] when none are given. Invalid directives are skipped.
pub fn env_filter_from(directives: Option<&str>) -> EnvFilter {
  EnvFilter::builder()
    .with_default_directive(DEFAULT_LEVEL.into())
    .parse_lossy(directives.unwrap_or_default())
}

pub fn env_filter() -> EnvFilter {
  let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
  env_filter_from(directives.as_deref())
}

/// Installs the global fmt subscriber. Span close events carry the duration.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_span_events(FmtSpan::CLOSE)
    .init();
}
