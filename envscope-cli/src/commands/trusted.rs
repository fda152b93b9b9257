//! Trusted command implementation.
//!
//! This module implements the `trusted` command, which lists every trust
//! grant in the store.

use crate::error::CliError;
use crate::utils::{format_timestamp, open_vault, shorten_path, GlobalOptions};
use clap::Args;
use std::io::Write;

/// List trusted directories.
#[derive(Args)]
pub struct TrustedCommand {
    /// Output JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Show full paths instead of shortened forms
    #[arg(long)]
    pub show_full_paths: bool,
}

impl TrustedCommand {
    /// Execute the trusted command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut vault = open_vault(global)?;
        let records = vault.list_trusted()?;
        vault.close()?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if self.json {
            let json_data: Vec<serde_json::Value> = records
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "path": r.path.as_str(),
                        "inode": r.inode,
                        "trusted_at": format_timestamp(r.trusted_at),
                    })
                })
                .collect();
            serde_json::to_writer_pretty(&mut handle, &json_data)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            writeln!(handle)?;
            return Ok(());
        }

        writeln!(handle, "PATH\tTRUSTED_AT")?;
        for record in &records {
            let path = if self.show_full_paths {
                record.path.to_string()
            } else {
                shorten_path(record.path.as_path())
            };
            writeln!(handle, "{path}\t{}", format_timestamp(record.trusted_at))?;
        }
        Ok(())
    }
}
