// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use vigil_cli::{Cli, Commands, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging.init("vigil-cli")?;

    match cli.command {
        Commands::Schema { subcommand } => subcommand.run(),
    }
}
