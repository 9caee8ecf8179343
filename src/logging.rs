//! Logging setup for the binary.
//!
//! Installs a global tracing subscriber that writes to stderr, keeping
//! stdout free for prediction output.

use tracing_subscriber::{fmt, EnvFilter};

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The configured filter directive does not parse.
    #[error("Invalid log filter {filter:?}: {source}")]
    InvalidFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(String),
}

/// Builds the filter: `RUST_LOG` when set, otherwise `default_filter`.
pub fn build_env_filter(default_filter: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter).map_err(|source| LoggingError::InvalidFilter {
        filter: default_filter.to_string(),
        source,
    })
}

/// Initialize tracing to write to stderr.
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    let filter = build_env_filter(default_filter)?;
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| LoggingError::SetGlobal(err.to_string()))
}
