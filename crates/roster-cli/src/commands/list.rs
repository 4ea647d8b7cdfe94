//! `roster list` — Browse or print the student list.

use std::sync::Arc;

use clap::Args;
use roster_api::{StudentDirectory, StudentsClient};
use roster_common::config::RosterConfig;
use roster_tui::Entry;

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print a plain table instead of entering the TUI.
    #[arg(long)]
    pub plain: bool,
}

/// Executes the `list` command.
///
/// # Errors
///
/// Returns an error if the request fails or the terminal session cannot be
/// set up.
pub fn execute(args: &ListArgs, config: &RosterConfig) -> anyhow::Result<()> {
    let client = StudentsClient::new(config)?;

    if args.plain {
        let runtime = tokio::runtime::Runtime::new()?;
        let students = runtime.block_on(client.list())?;
        if students.is_empty() {
            println!("No students registered.");
            return Ok(());
        }
        println!("{:<8} {:<24} {:<10} {:<20}", "ID", "NAME", "ZIPCODE", "CITY");
        for student in &students {
            println!(
                "{:<8} {:<24} {:<10} {:<20}",
                student.id, student.name, student.zipcode, student.city
            );
        }
        return Ok(());
    }

    let directory: Arc<dyn StudentDirectory> = Arc::new(client);
    roster_tui::run(Entry::Index, directory)?;
    Ok(())
}
