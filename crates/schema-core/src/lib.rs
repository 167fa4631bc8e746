// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! JSON Schema generation and export engine for the Vigil monitoring schema.
//!
//! This crate turns the typed monitor models from `vigil-monitor-types` into
//! JSON Schema (draft-7) documents and persists them as pretty-printed
//! files. It is a one-shot batch tool: every operation either fully
//! succeeds or propagates its error to the caller, and re-running with the
//! same revision produces a byte-identical file.
//!
//! Malformed schema composition is unrepresentable here: the monitor
//! models are sum types, so a conflicting base/variant combination is a
//! compile error rather than a runtime failure.

pub mod error;
pub mod export;
pub mod generate;
pub mod version;

pub use error::{Error, Result};
pub use version::SchemaVersion;

use std::path::{Path, PathBuf};

/// Fixed filename that always tracks the newest revision.
pub const LATEST_FILE_NAME: &str = "latest.json";

/// Export one schema revision to `path`.
pub fn export_to(version: SchemaVersion, path: &Path) -> Result<()> {
    let doc = generate::generate(version)?;
    export::write_pretty(&doc, path)
}

/// Export `version` into `out_dir` under its version-stamped filename.
///
/// Returns the written path.
pub fn export_version(version: SchemaVersion, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(version.file_name());
    export_to(version, &path)?;
    Ok(path)
}

/// Export every retained snapshot into `out_dir`, plus the fixed
/// [`LATEST_FILE_NAME`] alias for the newest one.
///
/// Returns the written paths, oldest snapshot first.
pub fn export_all(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(SchemaVersion::ALL.len() + 1);
    for version in SchemaVersion::ALL {
        written.push(export_version(version, out_dir)?);
    }

    let latest = out_dir.join(LATEST_FILE_NAME);
    export_to(SchemaVersion::latest(), &latest)?;
    written.push(latest);
    Ok(written)
}
