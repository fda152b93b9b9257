//! Remove command implementation.
//!
//! This module implements the `remove` command. Only the entry stored at
//! exactly the given directory is deleted, so an ancestor's value becomes
//! visible again.

use crate::error::CliError;
use crate::utils::{open_vault, target_dir, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Delete a secret or block from exactly one directory.
#[derive(Args)]
pub struct RemoveCommand {
    /// Secret name
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Directory scope (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = target_dir(self.path);
        let mut vault = open_vault(global)?;
        let scope = vault.canonicalize(&dir)?;
        let removed = vault.remove(&self.key, &dir)?;
        vault.close()?;

        if !removed {
            return Err(CliError::SemanticFailure(format!(
                "no entry for '{}' at {scope}",
                self.key
            )));
        }
        if !global.quiet {
            eprintln!("Removed {} from {scope}", self.key);
        }
        Ok(())
    }
}
