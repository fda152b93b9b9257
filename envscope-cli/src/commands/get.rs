//! Get command implementation.
//!
//! This module implements the `get` command, which prints the value of a
//! secret as seen from a directory.

use crate::error::CliError;
use crate::utils::{open_vault, target_dir, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Print the secret visible from a directory.
#[derive(Args)]
pub struct GetCommand {
    /// Secret name
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Directory to resolve from (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Also print the directory the value comes from
    #[arg(long)]
    pub show_source: bool,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut vault = open_vault(global)?;
        let found = vault.get(&self.key, &target_dir(self.path))?;
        vault.close()?;

        let Some(secret) = found else {
            return Err(CliError::SemanticFailure(format!(
                "'{}' is not set for this directory",
                self.key
            )));
        };

        if self.show_source {
            println!("{}\t{}", secret.value, secret.source_path);
        } else {
            println!("{}", secret.value);
        }
        Ok(())
    }
}
