// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only
#![allow(clippy::disallowed_methods)] // CLI commands intentionally print to stdout/stderr

//! Schema export and inspection commands
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use schema_core::SchemaVersion;

#[derive(Subcommand)]
pub enum SchemaCommands {
    /// Export schema snapshots as JSON Schema (draft-7) documents
    Export {
        /// Directory to write the schema files into
        #[arg(long, default_value = "schemas")]
        out_dir: PathBuf,
        /// Export a single revision instead of every retained snapshot
        #[arg(long)]
        schema_version: Option<String>,
    },
    /// Print a schema revision to stdout
    Print {
        /// Revision to print (default: latest)
        #[arg(long)]
        schema_version: Option<String>,
    },
    /// List the retained schema revisions
    Versions,
}

impl SchemaCommands {
    pub fn run(self) -> Result<()> {
        match self {
            SchemaCommands::Export {
                out_dir,
                schema_version,
            } => export_schemas(&out_dir, schema_version.as_deref()),
            SchemaCommands::Print { schema_version } => print_schema(schema_version.as_deref()),
            SchemaCommands::Versions => list_versions(),
        }
    }
}

fn parse_version(s: &str) -> Result<SchemaVersion> {
    s.parse::<SchemaVersion>()
        .with_context(|| format!("parsing schema version '{}'", s))
}

fn export_schemas(out_dir: &Path, schema_version: Option<&str>) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let written = match schema_version {
        Some(s) => {
            let version = parse_version(s)?;
            let mut written = vec![schema_core::export_version(version, out_dir)?];
            if version == SchemaVersion::latest() {
                let latest = out_dir.join(schema_core::LATEST_FILE_NAME);
                schema_core::export_to(version, &latest)?;
                written.push(latest);
            }
            written
        }
        None => schema_core::export_all(out_dir)?,
    };

    for path in &written {
        tracing::info!(path = %path.display(), "exported schema");
        println!("{}", path.display());
    }

    Ok(())
}

fn print_schema(schema_version: Option<&str>) -> Result<()> {
    let version = match schema_version {
        Some(s) => parse_version(s)?,
        None => SchemaVersion::latest(),
    };

    let doc = schema_core::generate::generate(version)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn list_versions() -> Result<()> {
    for version in SchemaVersion::ALL {
        if version == SchemaVersion::latest() {
            println!("{} (latest)", version);
        } else {
            println!("{}", version);
        }
    }
    Ok(())
}
