//! # Manifest Sweep CLI (`msweep`)
//!
//! Compacts an artifact index manifest: for every `path` the manifest
//! mentions, exactly one record survives (the most recently indexed one),
//! and the survivors are written back out sorted ascending by `indexed_at`.
//!
//! ```bash
//! msweep --data-path ./data.json
//! msweep -d ./data.json -o ./compact.json --log-format json -v
//! ```
//!
//! Exits 0 on success (and on `--help`), 1 when the manifest cannot be
//! read, decoded, encoded, or written.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::error;

use manifest_sweep::config::{Config, LogFormat};
use manifest_sweep::logging;
use manifest_sweep::sweep;

#[derive(Parser)]
#[command(
    name = "msweep",
    about = "Compacts an artifact index manifest: one record per path, newest indexed_at wins",
    version
)]
struct Cli {
    /// Path to the JSON manifest to sweep.
    #[arg(short = 'd', long)]
    data_path: PathBuf,

    /// Where to write the swept manifest.
    #[arg(short, long, default_value = "data1.json")]
    output: PathBuf,

    /// Log format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Show verbose debug information; each -v bumps the log level.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let config = Config {
        data_path: cli.data_path,
        output_path: cli.output,
        log_format: cli.log_format,
        verbosity: cli.verbose,
    };

    if let Err(err) = logging::init(config.log_format, config.verbosity) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    if let Err(err) = sweep::run_sweep(&config) {
        error!(error = %format!("{err:#}"), "sweep failed");
        std::process::exit(1);
    }
}
