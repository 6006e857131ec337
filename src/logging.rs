//! Logging setup.
//!
//! Events go to stderr, as human-readable text or one JSON object per line,
//! so the data surface stays clean for the manifest itself. The level starts
//! at INFO; each `-v` on the command line bumps it to DEBUG, then TRACE.

use anyhow::{anyhow, Result};
use tracing::Level;

use crate::config::LogFormat;

/// Install the global subscriber for this process.
///
/// Fails if a subscriber is already set, which only happens when `init` is
/// called twice.
pub fn init(format: LogFormat, verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|err| anyhow!("Failed to initialize logging: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so a
    // single test exercises both the success and the already-set paths.
    #[test]
    fn test_init_succeeds_once_then_reports_already_set() {
        init(LogFormat::Text, 0).unwrap();

        let err = init(LogFormat::Json, 2).unwrap_err();
        assert!(err.to_string().contains("Failed to initialize logging"));
    }
}
