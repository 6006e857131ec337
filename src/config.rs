//! Run configuration.
//!
//! Everything a sweep needs, assembled once in `main` from the parsed
//! command line and passed by reference into the run function.

use std::path::PathBuf;

use clap::ValueEnum;

/// Log output format, selected by `--log-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line events.
    Text,
    /// One JSON object per event.
    Json,
}

/// Configuration for one sweep run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Manifest to read.
    pub data_path: PathBuf,
    /// Where the swept manifest is written.
    pub output_path: PathBuf,
    /// Format for log events on stderr.
    pub log_format: LogFormat,
    /// Number of `-v` flags; each one bumps the log level.
    pub verbosity: u8,
}
