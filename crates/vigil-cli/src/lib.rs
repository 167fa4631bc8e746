// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use clap::Subcommand;
use vigil_logging::CliLoggingArgs;

pub mod schema_commands;

pub use clap::Parser;

#[derive(clap::Parser)]
#[command(
    name = "vigil",
    about = "Vigil monitoring schema CLI",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub logging: CliLoggingArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Schema {
        #[command(subcommand)]
        subcommand: schema_commands::SchemaCommands,
    },
}
