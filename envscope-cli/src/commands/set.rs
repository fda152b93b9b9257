//! Set command implementation.
//!
//! This module implements the `set` command, which stores a secret at a
//! directory scope, replacing any value or block already there.

use crate::error::CliError;
use crate::utils::{
    open_vault, read_value_from_stdin, target_dir, warn_unconventional_key, GlobalOptions,
};
use clap::Args;
use std::path::PathBuf;

/// Store a secret for a directory.
#[derive(Args)]
pub struct SetCommand {
    /// Secret name
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Secret value (read from stdin when omitted)
    #[arg(value_name = "VALUE")]
    pub value: Option<String>,

    /// Directory scope (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl SetCommand {
    /// Execute the set command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        warn_unconventional_key(global, &self.key);

        let value = match self.value {
            Some(value) => value,
            None => read_value_from_stdin()?,
        };

        let mut vault = open_vault(global)?;
        let scope = vault.set(&self.key, &value, &target_dir(self.path))?;
        vault.close()?;

        if !global.quiet {
            eprintln!("Set {} for {scope}", self.key);
        }
        Ok(())
    }
}
