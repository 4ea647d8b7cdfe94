//! `roster view` — Open the detail screen for one student record.

use std::sync::Arc;

use clap::Args;
use roster_api::{StudentDirectory, StudentsClient};
use roster_common::config::RosterConfig;
use roster_common::types::StudentId;
use roster_tui::Entry;

/// Arguments for the `view` command.
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Identifier of the record to open.
    pub id: u64,
}

/// Executes the `view` command.
///
/// # Errors
///
/// Returns an error if the client or terminal session cannot be set up.
pub fn execute(args: &ViewArgs, config: &RosterConfig) -> anyhow::Result<()> {
    let directory: Arc<dyn StudentDirectory> = Arc::new(StudentsClient::new(config)?);
    roster_tui::run(Entry::Detail(StudentId::new(args.id)), directory)?;
    Ok(())
}
