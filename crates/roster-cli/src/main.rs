//! # roster — student-records terminal client
//!
//! Browse, inspect, and delete student records against a remote REST
//! service, either interactively (TUI) or from plain subcommands.

mod commands;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
