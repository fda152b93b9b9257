//! Block command implementation.
//!
//! This module implements the `block` command, which stores a tombstone so
//! that an inherited secret is invisible at and below a directory.

use crate::error::CliError;
use crate::utils::{open_vault, target_dir, warn_unconventional_key, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Block an inherited secret at and below a directory.
#[derive(Args)]
pub struct BlockCommand {
    /// Secret name
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Directory scope (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl BlockCommand {
    /// Execute the block command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        warn_unconventional_key(global, &self.key);

        let mut vault = open_vault(global)?;
        let scope = vault.block(&self.key, &target_dir(self.path))?;
        vault.close()?;

        if !global.quiet {
            eprintln!("Blocked {} at {scope}", self.key);
        }
        Ok(())
    }
}
