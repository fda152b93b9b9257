//! Status command implementation.
//!
//! This module implements the `status` command, which reports whether a
//! directory is trusted. The exit code is 1 when it is not, so the command
//! can be used in scripts.

use crate::error::CliError;
use crate::utils::{open_vault, target_dir, GlobalOptions};
use clap::Args;
use envscope::{NotTrustedReason, TrustStatus};
use std::path::PathBuf;

/// Report whether a directory is trusted.
#[derive(Args)]
pub struct StatusCommand {
    /// Directory to check (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = target_dir(self.path);
        let mut vault = open_vault(global)?;
        let status = vault.is_trusted(&dir)?;
        vault.close()?;

        match status {
            TrustStatus::Trusted { trusted_path } => {
                println!("trusted (via {trusted_path})");
                Ok(())
            }
            TrustStatus::NotTrusted { reason } => {
                println!("not trusted ({reason})");
                Err(CliError::SemanticFailure(describe(reason).to_string()))
            }
        }
    }
}

fn describe(reason: NotTrustedReason) -> &'static str {
    match reason {
        NotTrustedReason::PathNotFound => "directory does not exist",
        NotTrustedReason::NotTrusted => {
            "directory is not trusted; run `envscope trust` to trust it"
        }
        NotTrustedReason::InodeMismatch => {
            "directory was replaced since it was trusted; run `envscope trust` again"
        }
    }
}
