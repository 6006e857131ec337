//! Manifest file I/O.
//!
//! Decodes a manifest file into records and encodes records back out,
//! pretty-printed. Every failure carries the manifest path so the log line
//! names the file that broke the run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Record;

/// Read and decode the manifest at `path`.
pub fn read_manifest(path: &Path) -> Result<Vec<Record>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

    let records: Vec<Record> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to decode manifest: {}", path.display()))?;

    Ok(records)
}

/// Encode `records` as pretty-printed JSON and write them to `path`.
///
/// The destination is touched only after the whole manifest has been
/// encoded, in a single write.
pub fn write_manifest(path: &Path, records: &[Record]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("Failed to encode manifest")?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

    Ok(())
}
