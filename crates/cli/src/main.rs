// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! relay - inspect and exercise project event flows

mod commands;
mod output;
mod project;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, emit, flows};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::project::find_project_root;

#[derive(Parser)]
#[command(
    name = "relay",
    version,
    about = "relay - event flows for project automation"
)]
struct Cli {
    /// Project root directory (defaults to RELAY_PROJECT_ROOT or the nearest .relay/)
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the project's flows
    Flows(flows::FlowsArgs),
    /// Validate a condition expression or the project's flows file
    Check(check::CheckArgs),
    /// Emit one event through the project's flows
    Emit(emit::EmitArgs),
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let project_root = cli.project.map_or_else(find_project_root, Ok)?;
    tracing::debug!(project = %project_root.display(), "resolved project root");

    let ok = match cli.command {
        Commands::Flows(args) => flows::handle(args, &project_root)?,
        Commands::Check(args) => check::handle(args, &project_root)?,
        Commands::Emit(args) => emit::handle(args, &project_root).await?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
