//! CLI command definitions and dispatch.

pub mod delete;
pub mod list;
pub mod view;

use clap::{Parser, Subcommand};
use roster_common::config::RosterConfig;

/// roster — terminal client for student records.
#[derive(Parser, Debug)]
#[command(name = roster_common::constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the students REST service.
    #[arg(
        long,
        global = true,
        env = roster_common::constants::API_URL_ENV,
        default_value = roster_common::constants::DEFAULT_API_URL
    )]
    pub api_url: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the detail screen for one student record.
    View(view::ViewArgs),
    /// Browse the student list (or print it with --plain).
    List(list::ListArgs),
    /// Delete a student record without entering the TUI.
    Delete(delete::DeleteArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = RosterConfig::with_api_url(cli.api_url)?;
    match cli.command {
        Command::View(args) => view::execute(&args, &config),
        Command::List(args) => list::execute(&args, &config),
        Command::Delete(args) => delete::execute(&args, &config),
    }
}
