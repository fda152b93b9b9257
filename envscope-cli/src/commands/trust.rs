//! Trust command implementation.
//!
//! This module implements the `trust` command. Trust covers the directory
//! and everything below it, and is tied to the directory's filesystem
//! identity: replacing the directory invalidates it.

use crate::error::CliError;
use crate::utils::{open_vault, target_dir, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Trust a directory and everything below it.
#[derive(Args)]
pub struct TrustCommand {
    /// Directory to trust (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl TrustCommand {
    /// Execute the trust command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut vault = open_vault(global)?;
        let grant = vault.trust(&target_dir(self.path))?;
        vault.close()?;

        log::debug!("recorded identity {} for {}", grant.inode, grant.path);
        if !global.quiet {
            eprintln!("Trusted {}", grant.path);
        }
        Ok(())
    }
}
