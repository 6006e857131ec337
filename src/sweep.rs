//! Sweep orchestration.
//!
//! A sweep is one full pass over a manifest file: decode the records,
//! collapse duplicate paths to their recency winners, and write the
//! survivors back out sorted by `indexed_at`. Any failure aborts the run;
//! there is no partial output.

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Config;
use crate::manifest;
use crate::reduce::reduce;

/// Run one sweep over `config.data_path`, writing the compacted manifest to
/// `config.output_path`.
pub fn run_sweep(config: &Config) -> Result<()> {
    let records = manifest::read_manifest(&config.data_path)?;
    let total = records.len();
    debug!(
        records = total,
        input = %config.data_path.display(),
        "manifest decoded"
    );

    let survivors = reduce(records);
    let dropped = total - survivors.len();

    manifest::write_manifest(&config.output_path, &survivors)?;
    info!(
        kept = survivors.len(),
        dropped,
        output = %config.output_path.display(),
        "sweep complete"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_for(dir: &Path) -> Config {
        Config {
            data_path: dir.join("data.json"),
            output_path: dir.join("data1.json"),
            log_format: LogFormat::Text,
            verbosity: 0,
        }
    }

    #[test]
    fn test_sweep_writes_deduped_sorted_manifest() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("data.json"),
            r#"[
                {"path": "a", "indexed_at": "2020-01-01T00:00:00Z"},
                {"path": "a", "indexed_at": "2021-01-01T00:00:00Z"},
                {"path": "b", "indexed_at": "2019-01-01T00:00:00Z"}
            ]"#,
        )
        .unwrap();

        run_sweep(&config_for(tmp.path())).unwrap();

        let swept = manifest::read_manifest(&tmp.path().join("data1.json")).unwrap();
        assert_eq!(swept.len(), 2);
        assert_eq!(swept[0].path, "b");
        assert_eq!(swept[1].path, "a");
        assert_eq!(
            swept[1].indexed_at,
            "2021-01-01T00:00:00Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap()
        );
    }

    #[test]
    fn test_sweep_missing_input_is_fatal_and_writes_nothing() {
        let tmp = TempDir::new().unwrap();

        let err = run_sweep(&config_for(tmp.path())).unwrap_err();

        assert!(err.to_string().contains("Failed to read manifest"));
        assert!(!tmp.path().join("data1.json").exists());
    }

    #[test]
    fn test_sweep_malformed_input_is_fatal_and_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("data.json"), "not a manifest").unwrap();

        let err = run_sweep(&config_for(tmp.path())).unwrap_err();

        assert!(err.to_string().contains("Failed to decode manifest"));
        assert!(!tmp.path().join("data1.json").exists());
    }
}
