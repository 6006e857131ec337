//! # Manifest Sweep
//!
//! Compacts an artifact index manifest: deduplicates records by `path`,
//! keeping the most recently indexed record for each, and emits the
//! survivors sorted ascending by `indexed_at`.
//!
//! The interesting work lives in [`reduce`]; everything around it is the
//! thin shell a command-line run needs. [`manifest`] decodes and encodes
//! the file, [`sweep`] wires one pass together, and [`config`] and
//! [`logging`] carry the parsed command line into the run.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Run configuration built from the CLI |
//! | [`logging`] | tracing subscriber setup (text/JSON, verbosity) |
//! | [`models`] | The manifest `Record` |
//! | [`reduce`] | The keep-newest deduplication pass |
//! | [`manifest`] | Manifest file decode/encode |
//! | [`sweep`] | Read, reduce, write orchestration |

pub mod config;
pub mod logging;
pub mod manifest;
pub mod models;
pub mod reduce;
pub mod sweep;
