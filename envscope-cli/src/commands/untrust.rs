//! Untrust command implementation.

use crate::error::CliError;
use crate::utils::{open_vault, target_dir, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Revoke trust for a directory.
///
/// Only a grant recorded for exactly this directory is removed; a grant on
/// an ancestor still covers it.
#[derive(Args)]
pub struct UntrustCommand {
    /// Directory to untrust (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl UntrustCommand {
    /// Execute the untrust command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = target_dir(self.path);
        let mut vault = open_vault(global)?;
        let canonical = vault.paths().canonicalize(&dir, true)?;
        let removed = vault.untrust(&dir)?;
        vault.close()?;

        if !removed {
            return Err(CliError::SemanticFailure(format!(
                "{canonical} is not trusted directly"
            )));
        }
        if !global.quiet {
            eprintln!("Untrusted {canonical}");
        }
        Ok(())
    }
}
