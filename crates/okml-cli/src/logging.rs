//! Tracing subscriber setup

use crate::error::ConfigError;
use crate::settings::LogFormat;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber, writing to stderr
///
/// # Errors
/// [`ConfigError::Logging`] if a global subscriber is already set.
pub fn init_logging(format: LogFormat) -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.with_target(true).try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    }
    .map_err(|e| ConfigError::Logging(e.to_string()))
}
