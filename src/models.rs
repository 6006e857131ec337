//! Core data model for the manifest.
//!
//! A manifest is a JSON array of [`Record`]s, each describing one indexed
//! artifact. The `path` field identifies the artifact and `indexed_at` says
//! when the indexer last saw it; everything else is descriptive and passes
//! through a sweep untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One indexed artifact reference.
///
/// Field order matches the manifest schema and is preserved on output.
/// `path` and `indexed_at` are required; the descriptive fields decode to
/// their zero values when absent and unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    #[serde(default)]
    pub browse_url: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub git_commit: String,
    #[serde(default)]
    pub git_url: String,
    pub indexed_at: DateTime<Utc>,
    pub path: String,
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub subpath: String,
    #[serde(default)]
    pub version: String,
}
