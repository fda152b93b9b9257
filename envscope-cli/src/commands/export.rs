//! Export command implementation.
//!
//! This module implements the `export` command, which prints the secrets
//! visible from a directory in a form other tools can consume. Unlike the
//! hook, it does not consult trust: the user asked for the values explicitly.

use crate::error::CliError;
use crate::utils::{open_vault, target_dir, GlobalOptions};
use clap::{Args, ValueEnum};
use envscope::{OutputFormat, ShellType};
use std::io::Write;
use std::path::PathBuf;

/// Print the visible secrets as export statements, dotenv or JSON.
#[derive(Args)]
pub struct ExportCommand {
    /// Directory to resolve from (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "export", ignore_case = true)]
    pub format: ExportFormat,

    /// Shell for export statements (default: detected from the environment)
    #[arg(long, value_enum)]
    pub shell: Option<ShellType>,
}

/// Output format for the export command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Shell export statements
    Export,
    /// Dotenv (.env) format
    Dotenv,
    /// JSON object keyed by secret name
    Json,
}

impl ExportCommand {
    fn output_format(&self) -> OutputFormat {
        match self.format {
            ExportFormat::Export => {
                OutputFormat::Export(self.shell.unwrap_or_else(ShellType::detect))
            }
            ExportFormat::Dotenv => OutputFormat::Dotenv,
            ExportFormat::Json => OutputFormat::Json,
        }
    }

    /// Execute the export command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.shell.is_some() && !matches!(self.format, ExportFormat::Export) {
            return Err(CliError::InvalidArguments(
                "--shell only applies to --format export".to_string(),
            ));
        }

        let mut vault = open_vault(global)?;
        let secrets = vault.resolve(&target_dir(self.path.clone()))?;
        vault.close()?;

        let output = self.output_format().create_formatter().format(&secrets)?;

        if output.is_empty() {
            return Ok(());
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{output}")?;
        Ok(())
    }
}
