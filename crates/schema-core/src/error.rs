// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for schema generation and export

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or exporting a schema document
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown schema version: {0}")]
    UnknownVersion(String),
}
