//! `roster delete` — Delete a student record without entering the TUI.

use clap::Args;
use roster_api::{StudentDirectory, StudentsClient};
use roster_common::config::RosterConfig;
use roster_common::types::StudentId;

/// Arguments for the `delete` command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Identifier of the record to delete.
    pub id: u64,

    /// Confirm the deletion. Without this flag the command refuses to run,
    /// mirroring the confirmation dialog of the interactive client.
    #[arg(long)]
    pub yes: bool,
}

/// Executes the `delete` command.
///
/// # Errors
///
/// Returns an error if confirmation is missing or the request fails.
pub fn execute(args: &DeleteArgs, config: &RosterConfig) -> anyhow::Result<()> {
    let id = StudentId::new(args.id);
    if !args.yes {
        anyhow::bail!("refusing to delete student {id} without --yes");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let client = StudentsClient::new(config)?;
    runtime.block_on(client.remove(id))?;
    tracing::info!(%id, "student deleted");
    println!("Student {id} deleted.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_without_confirmation_flag() {
        let args = DeleteArgs { id: 42, yes: false };
        let config = RosterConfig::default();
        let err = execute(&args, &config).unwrap_err();
        assert!(err.to_string().contains("--yes"));
    }
}
